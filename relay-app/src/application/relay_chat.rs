use super::UpstreamClient;
use crate::domain::{ChatReply, ChatRequest};
use relay_errors::AppError;
use std::sync::Arc;

pub struct RelayChat {
    upstream: Arc<dyn UpstreamClient>,
}

impl RelayChat {
    pub fn new(upstream: Arc<dyn UpstreamClient>) -> Self {
        Self { upstream }
    }

    pub async fn execute(&self, request: ChatRequest) -> Result<ChatReply, AppError> {
        let text = self
            .upstream
            .send_message(&request.message)
            .await
            .inspect_err(|e| tracing::error!("Chat relay failed: {}", e))?;

        Ok(ChatReply::new(text))
    }
}
