//! Configuration for the HTTP transport.

use std::time::Duration;

use crate::error::{Result, TransportError};

pub const DEFAULT_BASE_URL: &str = "https://social-network.samuraijs.com/api/1.1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the todo-lists API lives and how to authenticate against it.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// API root without trailing slash (e.g. "https://host/api/1.1")
    pub base_url: String,
    /// Sent as the `API-KEY` header on every request
    pub api_key: String,
    /// Per-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    /// Create config from environment variables.
    ///
    /// Required: `TODOSYNC_API_KEY`
    /// Optional: `TODOSYNC_API_URL` (default: [`DEFAULT_BASE_URL`])
    /// Optional: `TODOSYNC_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("TODOSYNC_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| TransportError::Config("TODOSYNC_API_KEY not set".into()))?;

        let base_url = lookup("TODOSYNC_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup("TODOSYNC_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                TransportError::Config(format!("TODOSYNC_TIMEOUT_SECS is not a number: '{}'", raw))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self::new(base_url, api_key).timeout(Duration::from_secs(timeout)))
    }

    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("todosync/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
