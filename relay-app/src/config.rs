use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STATIC_DIR: &str = "./static";

const ENV_HOST: &str = "SERVER_HOST";
const ENV_PORT: &str = "SERVER_PORT";
const ENV_STATIC_DIR: &str = "STATIC_DIR";
const ENV_API_KEY: &str = "DEEPSEEK_API_KEY";
const ENV_API_URL: &str = "DEEPSEEK_API_URL";

/// Credential and base URL for the upstream chat-completion API.
///
/// Both are optional at startup. Their absence only surfaces when a chat
/// request is relayed.
#[derive(Clone, Default)]
pub struct UpstreamSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl UpstreamSettings {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: Some(base_url.into()),
        }
    }

    pub fn unconfigured() -> Self {
        Self::default()
    }

    /// Returns `(api_key, base_url)` when both are set and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let api_key = self.api_key.as_deref().filter(|k| !k.is_empty())?;
        let base_url = self.base_url.as_deref().filter(|u| !u.is_empty())?;
        Some((api_key, base_url))
    }

    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }
}

impl fmt::Debug for UpstreamSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Process configuration, read once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub upstream: UpstreamSettings,
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty(ENV_PORT) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "Invalid {} value {:?}, falling back to {}",
                    ENV_PORT,
                    raw,
                    DEFAULT_PORT
                );
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            host: non_empty(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            static_dir: non_empty(ENV_STATIC_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            upstream: UpstreamSettings {
                api_key: lookup(ENV_API_KEY),
                base_url: lookup(ENV_API_URL),
            },
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
