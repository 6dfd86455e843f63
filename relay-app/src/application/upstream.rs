use async_trait::async_trait;
use relay_errors::AppError;

/// Sends one user message to the chat-completion service and returns the
/// reply text.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn send_message(&self, message: &str) -> Result<String, AppError>;
}
