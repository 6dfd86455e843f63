mod chat;

pub use chat::{ChatReply, ChatRequest};
