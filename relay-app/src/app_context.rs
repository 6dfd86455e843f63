use crate::application::{RelayChat, UpstreamClient};
use crate::config::RelayConfig;
use crate::infrastructure::deepseek::DeepSeekClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub relay_chat: Arc<RelayChat>,
}

impl AppContext {
    pub fn new(upstream: Arc<dyn UpstreamClient>) -> Self {
        Self {
            relay_chat: Arc::new(RelayChat::new(upstream)),
        }
    }

    pub fn from_config(config: &RelayConfig) -> Self {
        if config.upstream.is_configured() {
            tracing::info!("Using DeepSeek backend");
        } else {
            tracing::warn!(
                "DEEPSEEK_API_KEY or DEEPSEEK_API_URL not set; /chat will fail until configured"
            );
        }

        Self::new(Arc::new(DeepSeekClient::new(config.upstream.clone())))
    }
}
