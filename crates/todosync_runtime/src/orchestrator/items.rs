use todosync_client::TransportError;
use todosync_core::{ItemAction, ItemId, ItemPatch, ListId, RequestStatus, merge_for_transport};
use todosync_observability::sync_span;
use tracing::{Instrument, info, warn};

use super::SyncOrchestrator;
use crate::error::{Result, SyncError};

impl SyncOrchestrator {
    /// Load a list's items, replacing its current sequence.
    pub async fn fetch_items(&self, list_id: &ListId) -> Result<()> {
        async {
            self.begin();
            let items = self
                .transport
                .list_sub_items(list_id)
                .await
                .map_err(|err| self.network_failure(err))?;
            info!(count = items.len(), "items loaded");
            self.apply(ItemAction::SetAll {
                list_id: list_id.clone(),
                items,
            })?;
            self.succeed();
            Ok(())
        }
        .instrument(sync_span!("items.fetch", list_id))
        .await
    }

    pub async fn create_item(&self, list_id: &ListId, title: &str) -> Result<()> {
        async {
            self.begin();
            let envelope = self.settle(self.transport.create_sub_item(list_id, title).await)?;
            let Some(item) = envelope.into_item() else {
                return Err(self.network_failure(TransportError::Other(
                    "response carried no created item".into(),
                )));
            };
            info!(item_id = %item.id, "item created");
            self.apply(ItemAction::Add(item))?;
            self.succeed();
            Ok(())
        }
        .instrument(sync_span!("item.create", list_id))
        .await
    }

    /// Delete an item. Its entity status is back to idle however the call ends.
    pub async fn delete_item(&self, list_id: &ListId, item_id: &ItemId) -> Result<()> {
        async {
            self.begin();
            self.set_item_status(list_id, item_id, RequestStatus::Loading);
            let settled = self.settle(self.transport.delete_sub_item(list_id, item_id).await);
            let result = settled.and_then(|_| {
                self.apply(ItemAction::Remove {
                    list_id: list_id.clone(),
                    item_id: item_id.clone(),
                })
            });
            self.set_item_status(list_id, item_id, RequestStatus::Idle);
            result?;
            info!("item deleted");
            self.succeed();
            Ok(())
        }
        .instrument(sync_span!("item.delete", item_id))
        .await
    }

    /// Update some fields of an item.
    ///
    /// The remote endpoint needs the full record, so the patch is merged over the
    /// stored item first. If the item is not in the store nothing is sent and no status
    /// changes. Once the server accepts, only the patched fields are written back.
    pub async fn update_item(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
        patch: ItemPatch,
    ) -> Result<()> {
        async {
            let Some(current) = self.store.item(list_id, item_id) else {
                warn!("item not in store, update skipped");
                return Err(SyncError::ItemNotFound {
                    list_id: list_id.clone(),
                    item_id: item_id.clone(),
                });
            };
            let model = merge_for_transport(&current, &patch);

            self.begin();
            self.set_item_status(list_id, item_id, RequestStatus::Loading);
            let settled = self.settle(
                self.transport
                    .update_sub_item(list_id, item_id, &model)
                    .await,
            );
            let result = settled.and_then(|_| {
                self.apply(ItemAction::Update {
                    list_id: list_id.clone(),
                    item_id: item_id.clone(),
                    patch,
                })
            });
            self.set_item_status(list_id, item_id, RequestStatus::Idle);
            result?;
            info!("item updated");
            self.succeed();
            Ok(())
        }
        .instrument(sync_span!("item.update", item_id))
        .await
    }

    /// Move an item directly after `put_after`, or to the front when `None`.
    pub async fn reorder_item(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
        put_after: Option<&ItemId>,
    ) -> Result<()> {
        async {
            self.begin();
            self.set_item_status(list_id, item_id, RequestStatus::Loading);
            let settled = self.settle(
                self.transport
                    .reorder_sub_item(list_id, item_id, put_after)
                    .await,
            );
            let result = settled.and_then(|_| {
                self.apply(ItemAction::Reorder {
                    list_id: list_id.clone(),
                    item_id: item_id.clone(),
                    put_after: put_after.cloned(),
                })
            });
            self.set_item_status(list_id, item_id, RequestStatus::Idle);
            result?;
            info!("item reordered");
            self.succeed();
            Ok(())
        }
        .instrument(sync_span!("item.reorder", item_id))
        .await
    }
}
