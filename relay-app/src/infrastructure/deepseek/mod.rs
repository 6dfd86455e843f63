mod client;
mod transport;
mod types;

pub use client::DeepSeekClient;
pub use transport::{HttpTransport, ReqwestTransport};
pub use types::{ChatCompletionRequest, ChatCompletionResponse, Choice, Message, Usage, MODEL};
