//! Command dispatch.
//!
//! Every invocation starts from an empty store, loads what the command needs, runs one
//! orchestrator operation and prints the resulting state.

pub mod items;
pub mod lists;

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use todosync_client::{ClientConfig, HttpTransport};
use todosync_core::{ListId, Store};
use todosync_runtime::SyncOrchestrator;

use crate::cli::{Cli, Command};
use crate::output;

pub async fn handle(cli: Cli) -> Result<()> {
    let orch = connect()?;
    match cli.command {
        Command::Lists { items } => lists::show(&orch, items).await,
        Command::List { action } => lists::handle(&orch, action).await,
        Command::Items { list, filter } => items::show(&orch, &ListId::from(list), filter).await,
        Command::Item { action } => items::handle(&orch, action).await,
    }
}

fn connect() -> Result<SyncOrchestrator> {
    let config = ClientConfig::from_env()?;
    let transport = HttpTransport::new(config)?;
    Ok(SyncOrchestrator::new(Store::new(), Arc::new(transport)))
}

/// Run one operation behind a spinner and report how it settled.
async fn step<F>(orch: &SyncOrchestrator, message: &str, done: &str, op: F) -> Result<()>
where
    F: Future<Output = todosync_runtime::Result<()>>,
{
    let spinner = output::spinner(message);
    match op.await {
        Ok(()) => {
            output::spinner_success(&spinner, done);
            Ok(())
        }
        Err(e) => {
            let shown = orch.store().app_status().error.unwrap_or_else(|| e.to_string());
            output::spinner_error(&spinner, &shown);
            Err(e.into())
        }
    }
}
