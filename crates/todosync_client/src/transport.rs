//! The remote capability set the sync orchestrator depends on.

use async_trait::async_trait;
use todosync_core::{Item, ItemId, ItemModel, ListId, TodoList};

use crate::envelope::{Envelope, Payload};
use crate::error::Result;

/// Remote operations on lists and their items.
///
/// Read calls return the collection directly; an `Err` means no data arrived. Mutating
/// calls return the server's [`Envelope`], which may itself be a rejection. Callers
/// never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn list_resources(&self) -> Result<Vec<TodoList>>;

    async fn create_resource(&self, title: &str) -> Result<Envelope<Payload<TodoList>>>;

    async fn delete_resource(&self, list_id: &ListId) -> Result<Envelope>;

    async fn update_resource(&self, list_id: &ListId, title: &str) -> Result<Envelope>;

    /// Move a list after `put_after`, or to the front when `None`.
    async fn reorder_resource(
        &self,
        list_id: &ListId,
        put_after: Option<&ListId>,
    ) -> Result<Envelope>;

    async fn list_sub_items(&self, list_id: &ListId) -> Result<Vec<Item>>;

    async fn create_sub_item(
        &self,
        list_id: &ListId,
        title: &str,
    ) -> Result<Envelope<Payload<Item>>>;

    async fn delete_sub_item(&self, list_id: &ListId, item_id: &ItemId) -> Result<Envelope>;

    /// Replace every writable field of an item. The payload must be complete.
    async fn update_sub_item(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
        model: &ItemModel,
    ) -> Result<Envelope>;

    async fn reorder_sub_item(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
        put_after: Option<&ItemId>,
    ) -> Result<Envelope>;
}
