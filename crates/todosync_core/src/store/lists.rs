use tracing::debug;

use super::move_after;
use crate::action::ListAction;
use crate::types::TodoList;

pub(super) fn reduce(lists: &mut Vec<TodoList>, action: ListAction) {
    match action {
        ListAction::Add(list) => lists.insert(0, list.normalized()),
        ListAction::Remove(id) => lists.retain(|list| list.id != id),
        ListAction::Rename { id, title } => {
            if let Some(list) = lists.iter_mut().find(|list| list.id == id) {
                list.title = title;
            }
        }
        ListAction::SetFilter { id, filter } => {
            if let Some(list) = lists.iter_mut().find(|list| list.id == id) {
                list.filter = filter;
            }
        }
        ListAction::SetEntityStatus { id, status } => {
            if let Some(list) = lists.iter_mut().find(|list| list.id == id) {
                list.entity_status = status;
            }
        }
        ListAction::ReplaceAll(incoming) => {
            *lists = incoming.into_iter().map(TodoList::normalized).collect();
        }
        ListAction::Reorder { id, put_after } => {
            if !move_after(lists, |list| &list.id, &id, put_after.as_ref()) {
                debug!(list_id = %id, "reorder target not found, order unchanged");
            }
        }
    }
}
