//! Sync orchestration for todosync.
//!
//! [`SyncOrchestrator`] is the only writer of the store. Every operation sets the
//! global status to loading, awaits one remote call, then either applies the mutation
//! and reports success or runs the response through [`classify`] so the failure lands
//! in the global error slot.

pub mod classify;
pub mod error;
pub mod orchestrator;

pub use classify::{CAPTCHA_ERROR_MESSAGE, FALLBACK_ERROR_MESSAGE};
pub use error::{Result, SyncError};
pub use orchestrator::SyncOrchestrator;
