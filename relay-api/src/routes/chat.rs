use axum::extract::State;
use axum::Json;
use bytes::Bytes;
use relay_app::domain::{ChatReply, ChatRequest};
use relay_app::AppContext;
use relay_errors::AppError;

/// `POST /chat`. The body is decoded by hand so that a missing
/// `Content-Type` or a malformed payload both yield the same 400.
pub async fn chat(
    State(ctx): State<AppContext>,
    body: Bytes,
) -> Result<Json<ChatReply>, AppError> {
    let request: ChatRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Rejected chat request body: {}", e);
        AppError::InvalidRequestFormat(e.to_string())
    })?;

    let reply = ctx.relay_chat.execute(request).await?;
    Ok(Json(reply))
}
