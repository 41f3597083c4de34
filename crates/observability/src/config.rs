//! Configuration for logging

use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICE_NAME: &str = "todosync";

/// Observability configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Service name attached to the startup log line
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Enable the stderr fmt layer
    #[serde(default = "default_true")]
    pub enable_console: bool,

    /// Log level filter (e.g., "info", "todosync_runtime=debug")
    /// Falls back to `TODOSYNC_LOG`, then `RUST_LOG`, then "info"
    #[serde(default)]
    pub log_level: Option<String>,

    /// Include span targets in each line
    #[serde(default)]
    pub with_target: bool,
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            enable_console: true,
            log_level: None,
            with_target: false,
        }
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_target(mut self, on: bool) -> Self {
        self.with_target = on;
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `TODOSYNC_SERVICE_NAME` → service_name
    /// - `TODOSYNC_LOG` or `RUST_LOG` → log_level
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let service_name = lookup("TODOSYNC_SERVICE_NAME").unwrap_or_else(default_service_name);

        let log_level = lookup("TODOSYNC_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .filter(|level| !level.trim().is_empty());

        Self {
            service_name,
            log_level,
            ..Default::default()
        }
    }
}
