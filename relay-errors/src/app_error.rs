use serde::Serialize;

/// Everything that can go wrong while relaying a single chat message.
///
/// Variants carrying a `String` hold the underlying cause for logs. The
/// caller only ever sees [`AppError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("invalid request format: {0}")]
    InvalidRequestFormat(String),

    #[error("upstream API key or URL not configured")]
    ConfigurationMissing,

    #[error("failed to serialize upstream request: {0}")]
    Serialization(String),

    #[error("failed to build upstream request: {0}")]
    RequestBuild(String),

    #[error("upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    #[error("failed to read upstream response: {0}")]
    ResponseRead(String),

    #[error("failed to parse upstream response: {0}")]
    ResponseParse(String),

    #[error("upstream returned no choices")]
    EmptyUpstreamResponse,
}

impl AppError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidRequestFormat(_) => "Invalid request format",
            Self::ConfigurationMissing => "API key or URL not configured",
            Self::Serialization(_) => "Failed to prepare request",
            Self::RequestBuild(_) => "Failed to create request",
            Self::UpstreamUnreachable(_) => "Failed to send request to DeepSeek API",
            Self::ResponseRead(_) => "Failed to read response from DeepSeek API",
            Self::ResponseParse(_) => "Failed to parse response from DeepSeek API",
            Self::EmptyUpstreamResponse => "No response from DeepSeek API",
        }
    }

    /// HTTP status as a plain `u16` so the crate stays usable without axum.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequestFormat(_) => 400,
            _ => 500,
        }
    }
}

/// Wire shape of every error the front door returns.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.user_message(),
        }
    }
}

#[cfg(feature = "server")]
mod server_impl {
    use super::{AppError, ErrorBody};
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(ErrorBody::from(&self))).into_response()
        }
    }
}
