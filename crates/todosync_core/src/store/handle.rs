use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, trace};

use super::RootState;
use crate::action::Action;
use crate::error::Result;
use crate::status::AppStatus;
use crate::types::{Item, ItemId, ListId, TodoList};

/// Shared handle to one store instance.
///
/// Clones share state; separate `Store::new()` calls are fully isolated. Every
/// `dispatch` is applied atomically and wakes subscribers only if it succeeded. No lock
/// is ever held across an `.await`.
#[derive(Clone)]
pub struct Store {
    tx: Arc<watch::Sender<RootState>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.tx.borrow())
            .finish()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(RootState::default())
    }

    pub fn with_state(state: RootState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx: Arc::new(tx) }
    }

    /// Apply an action. Errors leave the state as it was.
    pub fn dispatch(&self, action: impl Into<Action>) -> Result<()> {
        let action = action.into();
        let name = action.name();
        trace!(action = ?action, "dispatch");
        let mut result = Ok(());
        self.tx.send_if_modified(|state| {
            result = state.apply(action);
            result.is_ok()
        });
        debug!(action = name, ok = result.is_ok(), "action applied");
        result
    }

    pub fn snapshot(&self) -> RootState {
        self.tx.borrow().clone()
    }

    /// Receiver that is notified after every successful dispatch.
    pub fn subscribe(&self) -> watch::Receiver<RootState> {
        self.tx.subscribe()
    }

    pub fn app_status(&self) -> AppStatus {
        self.tx.borrow().app.clone()
    }

    pub fn lists(&self) -> Vec<TodoList> {
        self.tx.borrow().lists.clone()
    }

    pub fn list(&self, id: &ListId) -> Option<TodoList> {
        self.tx.borrow().list(id).cloned()
    }

    pub fn items(&self, list_id: &ListId) -> Option<Vec<Item>> {
        self.tx.borrow().items_of(list_id).map(<[Item]>::to_vec)
    }

    pub fn item(&self, list_id: &ListId, item_id: &ItemId) -> Option<Item> {
        self.tx.borrow().item(list_id, item_id).cloned()
    }
}
