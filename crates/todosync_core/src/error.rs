use thiserror::Error;

use crate::types::ListId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An item-slice mutation targeted a list the store does not hold.
    #[error("list '{0}' is not loaded in the store")]
    UnknownList(ListId),
}

pub type Result<T> = std::result::Result<T, StoreError>;
