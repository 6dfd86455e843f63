use serde::{Deserialize, Serialize};

/// Body of `POST /chat`. The message is relayed as-is, empty included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

impl ChatReply {
    pub fn new(response: String) -> Self {
        Self { response }
    }
}
