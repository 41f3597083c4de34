//! Transport layer for todosync.
//!
//! [`Transport`] is the capability set the sync orchestrator consumes: read calls return
//! bare collections, mutating calls return an [`Envelope`] whose result code tells
//! application success from rejection. [`HttpTransport`] implements it against the
//! todo-lists REST API.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use todosync_client::{ClientConfig, HttpTransport, Transport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = HttpTransport::new(ClientConfig::from_env()?)?;
//!     for list in transport.list_resources().await? {
//!         println!("{} {}", list.id, list.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod transport;

pub use config::ClientConfig;
pub use envelope::{Empty, Envelope, Payload, ResultCode};
pub use error::{Result, TransportError};
pub use http::HttpTransport;
pub use transport::Transport;
