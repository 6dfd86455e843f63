use serde::{Deserialize, Deserializer, Serialize};

pub const MODEL: &str = "deepseek-chat";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

/// Upstream response envelope. Fields that are missing or `null` fall back to
/// defaults so an error envelope still parses and ends up as an empty
/// completion.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChatCompletionResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub object: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(deserialize_with = "null_as_default")]
    pub choices: Vec<Choice>,
    #[serde(deserialize_with = "null_as_default")]
    pub usage: Usage,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Choice {
    #[serde(deserialize_with = "null_as_default")]
    pub index: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub message: Message,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Usage {
    #[serde(deserialize_with = "null_as_default")]
    pub prompt_tokens: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub completion_tokens: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub total_tokens: u32,
}

impl ChatCompletionRequest {
    pub fn new(model: &str, message: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: message.to_string(),
            }],
        }
    }
}

impl ChatCompletionResponse {
    pub fn into_first_content(self) -> Option<String> {
        self.choices.into_iter().next().map(|c| c.message.content)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
