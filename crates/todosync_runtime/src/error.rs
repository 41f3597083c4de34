//! Runtime error types

use thiserror::Error;
use todosync_client::TransportError;
use todosync_core::{ItemId, ListId, StoreError};

/// Why an orchestrator operation did not complete. The store already reflects the
/// outcome by the time the caller sees this.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Rejected by server (code {code}): {message}")]
    Rejected { code: i32, message: String },

    #[error("Item '{item_id}' not found in list '{list_id}'")]
    ItemNotFound { list_id: ListId, item_id: ItemId },

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, SyncError>;
