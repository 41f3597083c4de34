//! todosync observability - tracing setup shared by the library crates and the CLI
//!
//! # Quick Start
//!
//! ```no_run
//! use todosync_observability::{ObservabilityConfig, init};
//!
//! let config = ObservabilityConfig::new("todosync")
//!     .with_log_level("debug");
//!
//! init(config)?;
//!
//! tracing::info!("Service started");
//! # Ok::<(), todosync_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `TODOSYNC_SERVICE_NAME` - Service name
//! - `TODOSYNC_LOG` or `RUST_LOG` - Log level filter

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env};
pub use crate::tracing::record_error;

// sync_span! is exported via #[macro_export] as todosync_observability::sync_span!()
