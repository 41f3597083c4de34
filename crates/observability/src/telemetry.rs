//! Subscriber initialization
//!
//! Installs a registry with an `EnvFilter` and, when enabled, a fmt layer on stderr so
//! that command output on stdout stays machine-readable.

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;

/// Build the level filter: explicit config first, then `TODOSYNC_LOG`, then `RUST_LOG`,
/// then "info".
pub fn env_filter(config: &ObservabilityConfig) -> Result<EnvFilter, ObservabilityError> {
    match &config.log_level {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| ObservabilityError::Config(format!("invalid log level '{}': {}", level, e))),
        None => Ok(EnvFilter::try_from_env("TODOSYNC_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("info"))),
    }
}

/// Initialize tracing with the given configuration
///
/// Fails if a global subscriber is already set.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = env_filter(&config)?;

    let fmt_layer = config.enable_console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.with_target)
    });

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::debug!(service.name = %config.service_name, "Tracing initialized");
    Ok(())
}

/// Initialize with configuration from environment variables
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}
