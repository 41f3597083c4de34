//! `todosync lists` and `todosync list ...`

use anyhow::Result;
use todosync_core::{ListId, RootState};
use todosync_runtime::SyncOrchestrator;

use super::{items, step};
use crate::cli::ListCommand;
use crate::output;
use crate::view::ListView;

pub async fn show(orch: &SyncOrchestrator, with_items: bool) -> Result<()> {
    if with_items {
        step(orch, "Loading lists and items...", "Loaded", orch.fetch_all()).await?;
    } else {
        step(orch, "Loading lists...", "Loaded", orch.fetch_lists()).await?;
    }
    let state = orch.store().snapshot();
    print_lists(&state);
    if with_items {
        for list in &state.lists {
            items::print_items(&state, &list.id);
        }
    }
    Ok(())
}

pub async fn handle(orch: &SyncOrchestrator, action: ListCommand) -> Result<()> {
    match action {
        ListCommand::Add { title } => {
            step(orch, "Creating list...", "List created", orch.create_list(&title)).await?;
        }
        ListCommand::Rename { id, title } => {
            let id = ListId::from(id);
            load(orch).await?;
            step(orch, "Renaming list...", "List renamed", orch.rename_list(&id, &title)).await?;
        }
        ListCommand::Delete { id } => {
            let id = ListId::from(id);
            load(orch).await?;
            step(orch, "Deleting list...", "List deleted", orch.delete_list(&id)).await?;
        }
        ListCommand::Move { id, after } => {
            let id = ListId::from(id);
            let after = after.map(ListId::from);
            load(orch).await?;
            step(
                orch,
                "Moving list...",
                "List moved",
                orch.reorder_list(&id, after.as_ref()),
            )
            .await?;
        }
        ListCommand::Filter { id, filter } => {
            let id = ListId::from(id);
            return items::show(orch, &id, Some(filter)).await;
        }
    }
    let state = orch.store().snapshot();
    print_lists(&state);
    output::app_status(&state.app);
    Ok(())
}

async fn load(orch: &SyncOrchestrator) -> Result<()> {
    step(orch, "Loading lists...", "Loaded", orch.fetch_lists()).await
}

pub fn print_lists(state: &RootState) {
    if state.lists.is_empty() {
        output::dim("No lists.");
        return;
    }
    let mut table = output::table(&["ID", "Title", "Items", "Added"]);
    for list in &state.lists {
        let count = state
            .items_of(&list.id)
            .map(|items| items.len().to_string())
            .unwrap_or_default();
        output::table_row(
            &mut table,
            &[
                list.id.to_string(),
                list.title.clone(),
                count,
                list.created_at.format("%Y-%m-%d %H:%M").to_string(),
            ],
        );
    }
    let views: Vec<ListView> = state.lists.iter().map(ListView::from).collect();
    output::table_print(&table, "lists", &views);
}
