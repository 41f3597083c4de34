use futures::future::join_all;
use todosync_client::TransportError;
use todosync_core::{FilterValue, ListAction, ListId, RequestStatus};
use todosync_observability::sync_span;
use tracing::{Instrument, info};

use super::SyncOrchestrator;
use crate::error::Result;

impl SyncOrchestrator {
    /// Load every list, replacing whatever the store held.
    pub async fn fetch_lists(&self) -> Result<()> {
        async {
            self.begin();
            let lists = self
                .transport
                .list_resources()
                .await
                .map_err(|err| self.network_failure(err))?;
            info!(count = lists.len(), "lists loaded");
            self.apply(ListAction::ReplaceAll(lists))?;
            self.succeed();
            Ok(())
        }
        .instrument(sync_span!("lists.fetch"))
        .await
    }

    pub async fn create_list(&self, title: &str) -> Result<()> {
        async {
            self.begin();
            let envelope = self.settle(self.transport.create_resource(title).await)?;
            let Some(list) = envelope.into_item() else {
                return Err(self.network_failure(TransportError::Other(
                    "response carried no created list".into(),
                )));
            };
            info!(list_id = %list.id, "list created");
            self.apply(ListAction::Add(list))?;
            self.succeed();
            Ok(())
        }
        .instrument(sync_span!("list.create"))
        .await
    }

    pub async fn delete_list(&self, id: &ListId) -> Result<()> {
        async {
            self.begin();
            self.set_list_status(id, RequestStatus::Loading);
            if let Err(err) = self.settle(self.transport.delete_resource(id).await) {
                self.set_list_status(id, RequestStatus::Idle);
                return Err(err);
            }
            info!("list deleted");
            self.apply(ListAction::Remove(id.clone()))?;
            self.succeed();
            Ok(())
        }
        .instrument(sync_span!("list.delete", id))
        .await
    }

    pub async fn rename_list(&self, id: &ListId, title: &str) -> Result<()> {
        async {
            self.begin();
            self.settle(self.transport.update_resource(id, title).await)?;
            info!("list renamed");
            self.apply(ListAction::Rename {
                id: id.clone(),
                title: title.to_string(),
            })?;
            self.succeed();
            Ok(())
        }
        .instrument(sync_span!("list.rename", id))
        .await
    }

    /// Move a list directly after `put_after`, or to the front when `None`.
    pub async fn reorder_list(&self, id: &ListId, put_after: Option<&ListId>) -> Result<()> {
        async {
            self.begin();
            self.set_list_status(id, RequestStatus::Loading);
            let settled = self.settle(self.transport.reorder_resource(id, put_after).await);
            let result = settled.and_then(|_| {
                self.apply(ListAction::Reorder {
                    id: id.clone(),
                    put_after: put_after.cloned(),
                })
            });
            self.set_list_status(id, RequestStatus::Idle);
            result?;
            info!("list reordered");
            self.succeed();
            Ok(())
        }
        .instrument(sync_span!("list.reorder", id))
        .await
    }

    /// Change which items a list shows. Local only.
    pub fn change_filter(&self, id: &ListId, filter: FilterValue) -> Result<()> {
        self.apply(ListAction::SetFilter {
            id: id.clone(),
            filter,
        })
    }

    /// Load the lists, then every list's items concurrently.
    ///
    /// Returns the first failure; the other fetches still run to completion.
    pub async fn fetch_all(&self) -> Result<()> {
        self.fetch_lists().await?;
        let ids: Vec<ListId> = self.store.lists().into_iter().map(|list| list.id).collect();
        let results = join_all(ids.iter().map(|id| self.fetch_items(id))).await;
        results.into_iter().collect::<Result<Vec<()>>>()?;
        Ok(())
    }
}
