use std::collections::HashMap;

use tracing::{debug, warn};

use super::move_after;
use crate::action::{ItemAction, ListAction};
use crate::error::{Result, StoreError};
use crate::patch::apply_patch;
use crate::status::RequestStatus;
use crate::types::{Item, ListId};

type ItemsByList = HashMap<ListId, Vec<Item>>;

/// Keep one item sequence per list as lists come and go.
pub(super) fn on_list_action(items: &mut ItemsByList, action: &ListAction) {
    match action {
        ListAction::Add(list) => {
            items.insert(list.id.clone(), Vec::new());
        }
        ListAction::Remove(id) => {
            items.remove(id);
        }
        ListAction::ReplaceAll(lists) => {
            items.retain(|id, _| lists.iter().any(|list| &list.id == id));
            for list in lists {
                items.insert(list.id.clone(), Vec::new());
            }
        }
        ListAction::Rename { .. }
        | ListAction::SetFilter { .. }
        | ListAction::SetEntityStatus { .. }
        | ListAction::Reorder { .. } => {}
    }
}

pub(super) fn reduce(items: &mut ItemsByList, action: ItemAction) -> Result<()> {
    match action {
        ItemAction::Add(item) => {
            let Some(seq) = items.get_mut(&item.list_id) else {
                warn!(list_id = %item.list_id, item_id = %item.id, "item added to unknown list");
                return Err(StoreError::UnknownList(item.list_id));
            };
            seq.insert(0, item);
        }
        ItemAction::Remove { list_id, item_id } => {
            if let Some(seq) = items.get_mut(&list_id) {
                seq.retain(|item| item.id != item_id);
            }
        }
        ItemAction::Update {
            list_id,
            item_id,
            patch,
        } => {
            if let Some(item) = find_mut(items, &list_id, |item| item.id == item_id) {
                *item = apply_patch(item, &patch);
            }
        }
        ItemAction::SetAll {
            list_id,
            items: incoming,
        } => {
            let Some(seq) = items.get_mut(&list_id) else {
                warn!(list_id = %list_id, "items loaded for unknown list");
                return Err(StoreError::UnknownList(list_id));
            };
            *seq = incoming
                .into_iter()
                .filter(|item| {
                    let owned = item.list_id == list_id;
                    if !owned {
                        warn!(list_id = %list_id, item_id = %item.id, owner = %item.list_id, "dropping item of another list");
                    }
                    owned
                })
                .map(|mut item| {
                    item.entity_status = RequestStatus::Idle;
                    item
                })
                .collect();
        }
        ItemAction::SetEntityStatus {
            list_id,
            item_id,
            status,
        } => {
            if let Some(item) = find_mut(items, &list_id, |item| item.id == item_id) {
                item.entity_status = status;
            }
        }
        ItemAction::Reorder {
            list_id,
            item_id,
            put_after,
        } => {
            let moved = items
                .get_mut(&list_id)
                .is_some_and(|seq| move_after(seq, |item| &item.id, &item_id, put_after.as_ref()));
            if !moved {
                debug!(list_id = %list_id, item_id = %item_id, "reorder target not found, order unchanged");
            }
        }
    }
    Ok(())
}

fn find_mut<'a>(
    items: &'a mut ItemsByList,
    list_id: &ListId,
    pred: impl Fn(&Item) -> bool,
) -> Option<&'a mut Item> {
    items
        .get_mut(list_id)
        .and_then(|seq| seq.iter_mut().find(|item| pred(item)))
}
