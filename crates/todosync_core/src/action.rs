//! Store mutations, one closed enum per slice.

use crate::patch::ItemPatch;
use crate::status::RequestStatus;
use crate::types::{FilterValue, Item, ItemId, ListId, TodoList};

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    SetStatus(RequestStatus),
    SetError(Option<String>),
}

/// List-slice mutations. `Add`, `Remove` and `ReplaceAll` also touch the item slice so
/// that every list always has exactly one item sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum ListAction {
    Add(TodoList),
    Remove(ListId),
    Rename {
        id: ListId,
        title: String,
    },
    SetFilter {
        id: ListId,
        filter: FilterValue,
    },
    SetEntityStatus {
        id: ListId,
        status: RequestStatus,
    },
    ReplaceAll(Vec<TodoList>),
    /// Move `id` directly after `put_after`, or to the front when `None`.
    Reorder {
        id: ListId,
        put_after: Option<ListId>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemAction {
    Add(Item),
    Remove {
        list_id: ListId,
        item_id: ItemId,
    },
    Update {
        list_id: ListId,
        item_id: ItemId,
        patch: ItemPatch,
    },
    SetAll {
        list_id: ListId,
        items: Vec<Item>,
    },
    SetEntityStatus {
        list_id: ListId,
        item_id: ItemId,
        status: RequestStatus,
    },
    Reorder {
        list_id: ListId,
        item_id: ItemId,
        put_after: Option<ItemId>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    App(AppAction),
    List(ListAction),
    Item(ItemAction),
}

impl Action {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::App(AppAction::SetStatus(_)) => "app/set_status",
            Action::App(AppAction::SetError(_)) => "app/set_error",
            Action::List(ListAction::Add(_)) => "list/add",
            Action::List(ListAction::Remove(_)) => "list/remove",
            Action::List(ListAction::Rename { .. }) => "list/rename",
            Action::List(ListAction::SetFilter { .. }) => "list/set_filter",
            Action::List(ListAction::SetEntityStatus { .. }) => "list/set_entity_status",
            Action::List(ListAction::ReplaceAll(_)) => "list/replace_all",
            Action::List(ListAction::Reorder { .. }) => "list/reorder",
            Action::Item(ItemAction::Add(_)) => "item/add",
            Action::Item(ItemAction::Remove { .. }) => "item/remove",
            Action::Item(ItemAction::Update { .. }) => "item/update",
            Action::Item(ItemAction::SetAll { .. }) => "item/set_all",
            Action::Item(ItemAction::SetEntityStatus { .. }) => "item/set_entity_status",
            Action::Item(ItemAction::Reorder { .. }) => "item/reorder",
        }
    }
}

impl From<AppAction> for Action {
    fn from(action: AppAction) -> Self {
        Action::App(action)
    }
}

impl From<ListAction> for Action {
    fn from(action: ListAction) -> Self {
        Action::List(action)
    }
}

impl From<ItemAction> for Action {
    fn from(action: ItemAction) -> Self {
        Action::Item(action)
    }
}
