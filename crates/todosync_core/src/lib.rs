//! Core data model and normalized store for todosync.
//!
//! The store holds two entity slices (lists, and items keyed by list id) plus the
//! global request status. Every mutation goes through a closed [`Action`] enum and is
//! applied atomically by [`Store::dispatch`].

pub mod action;
pub mod error;
pub mod patch;
pub mod status;
pub mod store;
pub mod types;

pub use action::{Action, AppAction, ItemAction, ListAction};
pub use error::{Result, StoreError};
pub use patch::{ItemModel, ItemPatch, apply_patch, merge_for_transport};
pub use status::{AppStatus, RequestStatus};
pub use store::{RootState, Store};
pub use types::{FilterValue, Item, ItemId, ItemStatus, ListId, Priority, TodoList};
