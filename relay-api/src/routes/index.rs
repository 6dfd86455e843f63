use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

pub const INDEX_PATH: &str = "/static/index.html";

// Must be 301; `Redirect::permanent` would answer 308.
pub async fn index() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, INDEX_PATH)])
}
