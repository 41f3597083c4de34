//! Partial item updates.
//!
//! A caller's [`ItemPatch`] is used twice: merged over the current item to build the
//! full [`ItemModel`] the remote update endpoint requires, and, once the server accepts
//! it, applied on its own to the stored item. The two functions are kept apart so the
//! full payload never leaks into the store and the partial one never reaches the wire.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{Item, ItemStatus, Priority};

/// Fields a caller wants to change. `None` means "leave as is". The nullable fields
/// take `Some(None)` to clear the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Option<NaiveDateTime>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Option<NaiveDateTime>>,
}

/// A field that is present in the input, `null` included, is a change.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ItemPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    pub fn status(mut self, status: ItemStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn start_date(mut self, start_date: NaiveDateTime) -> Self {
        self.start_date = Some(Some(start_date));
        self
    }

    pub fn clear_start_date(mut self) -> Self {
        self.start_date = Some(None);
        self
    }

    pub fn deadline(mut self, deadline: NaiveDateTime) -> Self {
        self.deadline = Some(Some(deadline));
        self
    }

    pub fn clear_deadline(mut self) -> Self {
        self.deadline = Some(None);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Complete writable field set of an item, as the remote update endpoint expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemModel {
    pub title: String,
    pub description: Option<String>,
    pub status: ItemStatus,
    pub priority: Priority,
    pub start_date: Option<NaiveDateTime>,
    pub deadline: Option<NaiveDateTime>,
}

/// Build the full transport payload: the item's current fields overridden by the patch.
pub fn merge_for_transport(current: &Item, patch: &ItemPatch) -> ItemModel {
    ItemModel {
        title: patch.title.clone().unwrap_or_else(|| current.title.clone()),
        description: patch
            .description
            .clone()
            .unwrap_or_else(|| current.description.clone()),
        status: patch.status.unwrap_or(current.status),
        priority: patch.priority.unwrap_or(current.priority),
        start_date: patch.start_date.unwrap_or(current.start_date),
        deadline: patch.deadline.unwrap_or(current.deadline),
    }
}

/// Shallow-merge the provided fields into a copy of `current`.
pub fn apply_patch(current: &Item, patch: &ItemPatch) -> Item {
    let mut updated = current.clone();
    if let Some(title) = &patch.title {
        updated.title = title.clone();
    }
    if let Some(description) = &patch.description {
        updated.description = description.clone();
    }
    if let Some(status) = patch.status {
        updated.status = status;
    }
    if let Some(priority) = patch.priority {
        updated.priority = priority;
    }
    if let Some(start_date) = patch.start_date {
        updated.start_date = start_date;
    }
    if let Some(deadline) = patch.deadline {
        updated.deadline = deadline;
    }
    updated
}
