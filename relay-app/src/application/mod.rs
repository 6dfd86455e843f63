mod relay_chat;
mod upstream;

pub use relay_chat::RelayChat;
pub use upstream::UpstreamClient;
