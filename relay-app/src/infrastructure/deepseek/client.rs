use super::transport::{HttpTransport, ReqwestTransport};
use super::types::{ChatCompletionRequest, ChatCompletionResponse, MODEL};
use crate::application::UpstreamClient;
use crate::config::UpstreamSettings;
use async_trait::async_trait;
use relay_errors::AppError;
use std::sync::Arc;

pub struct DeepSeekClient {
    transport: Arc<dyn HttpTransport>,
    settings: UpstreamSettings,
}

impl DeepSeekClient {
    pub fn new(settings: UpstreamSettings) -> Self {
        Self::with_transport(settings, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(settings: UpstreamSettings, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            settings,
        }
    }
}

fn completions_url(base_url: &str) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    format!("{}/chat/completions", base)
}

#[async_trait]
impl UpstreamClient for DeepSeekClient {
    async fn send_message(&self, message: &str) -> Result<String, AppError> {
        let (api_key, base_url) = self
            .settings
            .credentials()
            .ok_or(AppError::ConfigurationMissing)?;

        let request = ChatCompletionRequest::new(MODEL, message);
        let body =
            serde_json::to_vec(&request).map_err(|e| AppError::Serialization(e.to_string()))?;

        let raw = self
            .transport
            .post_json(&completions_url(base_url), api_key, body)
            .await?;

        let completion: ChatCompletionResponse =
            serde_json::from_slice(&raw).map_err(|e| AppError::ResponseParse(e.to_string()))?;

        tracing::debug!(
            id = %completion.id,
            model = %completion.model,
            choices = completion.choices.len(),
            total_tokens = completion.usage.total_tokens,
            "DeepSeek completion received"
        );

        completion
            .into_first_content()
            .ok_or(AppError::EmptyUpstreamResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct RecordedCall {
        url: String,
        api_key: String,
        body: Vec<u8>,
    }

    struct FakeTransport {
        reply: Result<Bytes, AppError>,
        calls: AtomicUsize,
        recorded: Mutex<Vec<RecordedCall>>,
    }

    impl FakeTransport {
        fn replying(body: &'static str) -> Arc<Self> {
            Self::with_reply(Ok(Bytes::from_static(body.as_bytes())))
        }

        fn with_reply(reply: Result<Bytes, AppError>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: AtomicUsize::new(0),
                recorded: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl HttpTransport for FakeTransport {
        async fn post_json(
            &self,
            url: &str,
            api_key: &str,
            body: Vec<u8>,
        ) -> Result<Bytes, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.recorded.lock().unwrap().push(RecordedCall {
                url: url.to_string(),
                api_key: api_key.to_string(),
                body,
            });
            self.reply.clone()
        }
    }

    const ONE_CHOICE: &str = r#"{
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "deepseek-chat",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": "  first reply\n"}, "finish_reason": "stop"},
            {"index": 1, "message": {"role": "assistant", "content": "second reply"}, "finish_reason": "stop"}
        ],
        "usage": {"prompt_tokens": 3, "completion_tokens": 4, "total_tokens": 7}
    }"#;

    fn configured() -> UpstreamSettings {
        UpstreamSettings::new("sk-test", "https://api.deepseek.com")
    }

    #[tokio::test]
    async fn test_returns_first_choice_verbatim() {
        let transport = FakeTransport::replying(ONE_CHOICE);
        let client = DeepSeekClient::with_transport(configured(), transport.clone());

        let reply = client.send_message("hello").await.unwrap();

        assert_eq!(reply, "  first reply\n");
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_outbound_envelope_carries_message_exactly() {
        let transport = FakeTransport::replying(ONE_CHOICE);
        let client = DeepSeekClient::with_transport(configured(), transport.clone());
        let message = "  Ünïcødé \"quoted\"\n\ttabs  ";

        client.send_message(message).await.unwrap();

        let recorded = transport.recorded.lock().unwrap();
        let call = &recorded[0];
        assert_eq!(call.url, "https://api.deepseek.com/chat/completions");
        assert_eq!(call.api_key, "sk-test");

        let sent: ChatCompletionRequest = serde_json::from_slice(&call.body).unwrap();
        assert_eq!(sent.model, "deepseek-chat");
        assert_eq!(sent.messages.len(), 1);
        assert_eq!(sent.messages[0].role, "user");
        assert_eq!(sent.messages[0].content, message);
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let transport = FakeTransport::replying(ONE_CHOICE);
        let settings = UpstreamSettings::new("sk-test", "https://api.deepseek.com/v1/");
        let client = DeepSeekClient::with_transport(settings, transport.clone());

        client.send_message("hi").await.unwrap();

        let recorded = transport.recorded.lock().unwrap();
        assert_eq!(recorded[0].url, "https://api.deepseek.com/v1/chat/completions");
    }

    #[tokio::test]
    async fn test_missing_configuration_skips_transport() {
        let cases = [
            UpstreamSettings::unconfigured(),
            UpstreamSettings {
                api_key: Some("sk-test".to_string()),
                base_url: None,
            },
            UpstreamSettings {
                api_key: None,
                base_url: Some("https://api.deepseek.com".to_string()),
            },
            UpstreamSettings::new("", ""),
        ];

        for settings in cases {
            let transport = FakeTransport::replying(ONE_CHOICE);
            let client = DeepSeekClient::with_transport(settings, transport.clone());

            let err = client.send_message("hello").await.unwrap_err();

            assert_eq!(err, AppError::ConfigurationMissing);
            assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn test_zero_choices_is_empty_response() {
        let transport = FakeTransport::replying(
            r#"{"id":"x","object":"chat.completion","created":1,"model":"deepseek-chat","choices":[],"usage":{}}"#,
        );
        let client = DeepSeekClient::with_transport(configured(), transport);

        let err = client.send_message("hello").await.unwrap_err();
        assert_eq!(err, AppError::EmptyUpstreamResponse);
    }

    #[tokio::test]
    async fn test_null_metadata_still_returns_reply() {
        let transport = FakeTransport::replying(
            r#"{"id":null,"model":null,"choices":[{"index":0,"message":{"role":null,"content":"hi"},"finish_reason":null}],"usage":null}"#,
        );
        let client = DeepSeekClient::with_transport(configured(), transport);

        assert_eq!(client.send_message("hello").await.unwrap(), "hi");
    }

    #[tokio::test]
    async fn test_null_choices_is_empty_response() {
        let transport = FakeTransport::replying(r#"{"choices":null}"#);
        let client = DeepSeekClient::with_transport(configured(), transport);

        let err = client.send_message("hello").await.unwrap_err();
        assert_eq!(err, AppError::EmptyUpstreamResponse);
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let transport = FakeTransport::replying("<html>502 Bad Gateway</html>");
        let client = DeepSeekClient::with_transport(configured(), transport);

        let err = client.send_message("hello").await.unwrap_err();
        assert!(matches!(err, AppError::ResponseParse(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_transport_errors_pass_through() {
        let transport = FakeTransport::with_reply(Err(AppError::UpstreamUnreachable(
            "connection refused".to_string(),
        )));
        let client = DeepSeekClient::with_transport(configured(), transport);

        let err = client.send_message("hello").await.unwrap_err();
        assert_eq!(err.user_message(), "Failed to send request to DeepSeek API");
    }
}
