use async_trait::async_trait;
use bytes::Bytes;
use relay_errors::AppError;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

/// The one network call the relay makes: POST a JSON body, get the raw
/// response body back.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(&self, url: &str, api_key: &str, body: Vec<u8>) -> Result<Bytes, AppError>;
}

pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, api_key: &str, body: Vec<u8>) -> Result<Bytes, AppError> {
        let request = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .body(body)
            .build()
            .map_err(|e| AppError::RequestBuild(e.to_string()))?;

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| AppError::UpstreamUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("DeepSeek API returned {}", status);
        }

        response
            .bytes()
            .await
            .map_err(|e| AppError::ResponseRead(e.to_string()))
    }
}
