//! `todosync items` and `todosync item ...`

use anyhow::Result;
use todosync_core::{FilterValue, ItemId, ListId, RootState};
use todosync_runtime::SyncOrchestrator;

use super::step;
use crate::cli::ItemCommand;
use crate::output;
use crate::view::ItemView;

pub async fn show(
    orch: &SyncOrchestrator,
    list_id: &ListId,
    filter: Option<FilterValue>,
) -> Result<()> {
    load(orch, list_id).await?;
    if let Some(filter) = filter {
        orch.change_filter(list_id, filter)?;
    }
    print_items(&orch.store().snapshot(), list_id);
    Ok(())
}

pub async fn handle(orch: &SyncOrchestrator, action: ItemCommand) -> Result<()> {
    let list_id = match action {
        ItemCommand::Add { list, title } => {
            let list_id = ListId::from(list);
            load(orch, &list_id).await?;
            step(
                orch,
                "Creating item...",
                "Item created",
                orch.create_item(&list_id, &title),
            )
            .await?;
            list_id
        }
        ItemCommand::Update { list, id, fields } => {
            let list_id = ListId::from(list);
            let item_id = ItemId::from(id);
            let patch = fields.into_patch();
            if patch.is_empty() {
                anyhow::bail!("nothing to update: pass at least one field");
            }
            load(orch, &list_id).await?;
            step(
                orch,
                "Updating item...",
                "Item updated",
                orch.update_item(&list_id, &item_id, patch),
            )
            .await?;
            list_id
        }
        ItemCommand::Delete { list, id } => {
            let list_id = ListId::from(list);
            let item_id = ItemId::from(id);
            load(orch, &list_id).await?;
            step(
                orch,
                "Deleting item...",
                "Item deleted",
                orch.delete_item(&list_id, &item_id),
            )
            .await?;
            list_id
        }
        ItemCommand::Move { list, id, after } => {
            let list_id = ListId::from(list);
            let item_id = ItemId::from(id);
            let after = after.map(ItemId::from);
            load(orch, &list_id).await?;
            step(
                orch,
                "Moving item...",
                "Item moved",
                orch.reorder_item(&list_id, &item_id, after.as_ref()),
            )
            .await?;
            list_id
        }
    };
    let state = orch.store().snapshot();
    print_items(&state, &list_id);
    output::app_status(&state.app);
    Ok(())
}

/// Load the lists, then the items of `list_id`.
async fn load(orch: &SyncOrchestrator, list_id: &ListId) -> Result<()> {
    step(orch, "Loading lists...", "Loaded lists", orch.fetch_lists()).await?;
    step(
        orch,
        "Loading items...",
        "Loaded items",
        orch.fetch_items(list_id),
    )
    .await
}

pub fn print_items(state: &RootState, list_id: &ListId) {
    let Some(list) = state.list(list_id) else {
        output::dim(&format!("List {} is not loaded.", list_id));
        return;
    };
    output::header(&format!("{} ({})", list.title, list.filter));
    let visible = state.visible_items(list_id);
    if visible.is_empty() {
        output::dim("No items.");
        return;
    }
    let mut table = output::table(&["ID", "Title", "Status", "Priority", "Deadline"]);
    for item in &visible {
        output::table_row(
            &mut table,
            &[
                item.id.to_string(),
                item.title.clone(),
                item.status.to_string(),
                item.priority.to_string(),
                item.deadline
                    .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default(),
            ],
        );
    }
    let views: Vec<ItemView> = visible.iter().copied().map(ItemView::from).collect();
    output::table_print(&table, list.title.as_str(), &views);
}
