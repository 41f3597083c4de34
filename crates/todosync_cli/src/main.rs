//! CLI entry point for todosync.

mod cli;
mod commands;
mod output;
mod view;

use clap::Parser;
use todosync_observability::ObservabilityConfig;

use crate::cli::Cli;

/// Load the nearest `.env` from the working directory or its parents.
fn load_env() {
    let Ok(mut dir) = std::env::current_dir() else {
        return;
    };
    for _ in 0..32 {
        let env_file = dir.join(".env");
        if env_file.exists() {
            let _ = dotenvy::from_path(&env_file);
            return;
        }
        if !dir.pop() {
            return;
        }
    }
}

fn init_logging(verbose: bool) {
    let mut config = ObservabilityConfig::from_env().with_target(verbose);
    if verbose {
        config = config.with_log_level("debug");
    } else if config.log_level.is_none() {
        config = config.with_log_level("warn");
    }
    if let Err(e) = todosync_observability::init(config) {
        output::error(&e.to_string());
    }
}

#[tokio::main]
async fn main() {
    load_env();
    let cli = Cli::parse();
    output::init(cli.output);
    init_logging(cli.verbose);

    if let Err(e) = commands::handle(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
