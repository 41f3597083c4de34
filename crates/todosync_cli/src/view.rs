//! Snapshot shapes printed with `--output json`.
//!
//! The wire types skip local view state, so these wrap them and add it back.

use serde::Serialize;
use todosync_core::{FilterValue, Item, RequestStatus, TodoList};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView<'a> {
    #[serde(flatten)]
    pub list: &'a TodoList,
    pub filter: FilterValue,
    pub entity_status: RequestStatus,
}

impl<'a> From<&'a TodoList> for ListView<'a> {
    fn from(list: &'a TodoList) -> Self {
        Self {
            list,
            filter: list.filter,
            entity_status: list.entity_status,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView<'a> {
    #[serde(flatten)]
    pub item: &'a Item,
    pub entity_status: RequestStatus,
}

impl<'a> From<&'a Item> for ItemView<'a> {
    fn from(item: &'a Item) -> Self {
        Self {
            item,
            entity_status: item.entity_status,
        }
    }
}
