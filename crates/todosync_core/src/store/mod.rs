//! Normalized state and its reducers.
//!
//! - **lists**: ordered list slice (newest first)
//! - **items**: item sequences keyed by list id
//! - **handle**: shared [`Store`] handle the orchestrator dispatches into

mod handle;
mod items;
mod lists;

pub use handle::Store;

use std::collections::HashMap;

use serde::Serialize;

use crate::action::Action;
use crate::error::Result;
use crate::status::AppStatus;
use crate::types::{Item, ItemId, ListId, TodoList};

/// Everything the presentation layer reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RootState {
    pub app: AppStatus,
    pub lists: Vec<TodoList>,
    pub items: HashMap<ListId, Vec<Item>>,
}

impl RootState {
    /// Apply one action. On error the state is left untouched.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::App(action) => {
                self.app.reduce(action);
                Ok(())
            }
            Action::List(action) => {
                items::on_list_action(&mut self.items, &action);
                lists::reduce(&mut self.lists, action);
                Ok(())
            }
            Action::Item(action) => items::reduce(&mut self.items, action),
        }
    }

    pub fn list(&self, id: &ListId) -> Option<&TodoList> {
        self.lists.iter().find(|list| &list.id == id)
    }

    pub fn items_of(&self, list_id: &ListId) -> Option<&[Item]> {
        self.items.get(list_id).map(Vec::as_slice)
    }

    pub fn item(&self, list_id: &ListId, item_id: &ItemId) -> Option<&Item> {
        self.items
            .get(list_id)
            .and_then(|items| items.iter().find(|item| &item.id == item_id))
    }

    /// Items of a list that its current filter lets through.
    pub fn visible_items(&self, list_id: &ListId) -> Vec<&Item> {
        let Some(list) = self.list(list_id) else {
            return Vec::new();
        };
        self.items
            .get(list_id)
            .map(|items| {
                items
                    .iter()
                    .filter(|item| list.filter.accepts(item.status))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Move the element keyed `id` to just after `put_after` (front when `None`).
/// Returns false and leaves `seq` alone if either key is missing.
fn move_after<T, K, F>(seq: &mut Vec<T>, key: F, id: &K, put_after: Option<&K>) -> bool
where
    K: PartialEq,
    F: Fn(&T) -> &K,
{
    if put_after == Some(id) {
        return false;
    }
    let Some(from) = seq.iter().position(|el| key(el) == id) else {
        return false;
    };
    if let Some(after) = put_after {
        if !seq.iter().any(|el| key(el) == after) {
            return false;
        }
    }
    let moved = seq.remove(from);
    let to = match put_after {
        None => 0,
        Some(after) => match seq.iter().position(|el| key(el) == after) {
            Some(idx) => idx + 1,
            None => return false,
        },
    };
    seq.insert(to, moved);
    true
}
