mod chat;
mod healthz;
mod index;

use axum::routing::{get, post};
use axum::Router;
use relay_app::AppContext;
use std::path::Path;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn router(app_context: AppContext, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index::index))
        .route("/chat", post(chat::chat))
        .route("/healthz", get(healthz::healthz))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(app_context)
}
