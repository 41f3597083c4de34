//! The sync orchestrator.
//!
//! - **lists**: list fetch/create/delete/rename/reorder, filter, fetch-all
//! - **items**: item fetch/create/delete/update/reorder
//!
//! Operations may run concurrently and settle in any order. The global status slot is
//! shared, so the last operation to settle decides what it shows.

mod items;
mod lists;

use std::sync::Arc;

use todosync_client::{Envelope, Transport, TransportError};
use todosync_core::{Action, AppAction, ItemId, ItemAction, ListAction, ListId, RequestStatus, Store};
use todosync_observability::record_error;
use tracing::error;

use crate::classify;
use crate::error::{Result, SyncError};

/// Drives a [`Store`] through a [`Transport`]. Clones share both.
#[derive(Clone)]
pub struct SyncOrchestrator {
    store: Store,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for SyncOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncOrchestrator")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl SyncOrchestrator {
    pub fn new(store: Store, transport: Arc<dyn Transport>) -> Self {
        Self { store, transport }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Clear the global error message.
    pub fn dismiss_error(&self) {
        self.mark(AppAction::SetError(None));
    }

    /// Dispatch a status change. These never fail for app actions and are no-ops for
    /// entities that are gone, so errors are only logged.
    fn mark(&self, action: impl Into<Action>) {
        if let Err(err) = self.store.dispatch(action) {
            error!(error = %err, "status update rejected");
        }
    }

    fn begin(&self) {
        self.mark(AppAction::SetStatus(RequestStatus::Loading));
    }

    fn succeed(&self) {
        self.mark(AppAction::SetStatus(RequestStatus::Succeeded));
    }

    fn set_list_status(&self, id: &ListId, status: RequestStatus) {
        self.mark(ListAction::SetEntityStatus {
            id: id.clone(),
            status,
        });
    }

    fn set_item_status(&self, list_id: &ListId, item_id: &ItemId, status: RequestStatus) {
        self.mark(ItemAction::SetEntityStatus {
            list_id: list_id.clone(),
            item_id: item_id.clone(),
            status,
        });
    }

    /// Apply a mutation. A store violation is surfaced like a failed call.
    fn apply(&self, action: impl Into<Action>) -> Result<()> {
        self.store.dispatch(action).map_err(|err| {
            record_error(&err);
            for action in classify::network_failure(&err) {
                self.mark(action);
            }
            SyncError::Store(err)
        })
    }

    fn network_failure(&self, err: TransportError) -> SyncError {
        record_error(&err);
        for action in classify::network_failure(&err) {
            self.mark(action);
        }
        SyncError::Transport(err)
    }

    fn application_failure<T>(&self, envelope: &Envelope<T>) -> SyncError {
        let message = classify::rejection_message(envelope);
        for action in classify::application_failure(envelope) {
            self.mark(action);
        }
        let err = SyncError::Rejected {
            code: envelope.result_code.code(),
            message,
        };
        record_error(&err);
        err
    }

    /// Classify a mutating call's outcome. `Ok` only for a success envelope.
    fn settle<T>(&self, outcome: todosync_client::Result<Envelope<T>>) -> Result<Envelope<T>> {
        match outcome {
            Err(err) => Err(self.network_failure(err)),
            Ok(envelope) if !envelope.is_success() => Err(self.application_failure(&envelope)),
            Ok(envelope) => Ok(envelope),
        }
    }
}
