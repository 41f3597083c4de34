//! CLI argument definitions using clap derive macros.

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand, ValueEnum};
use todosync_core::{FilterValue, ItemPatch, ItemStatus, Priority};

/// Sync todo lists with the remote todo-lists API
#[derive(Parser)]
#[command(name = "todosync", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for scripts
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show all lists
    Lists {
        /// Also load and show every list's items
        #[arg(long)]
        items: bool,
    },
    /// Create, rename, delete or move a list
    List {
        #[command(subcommand)]
        action: ListCommand,
    },
    /// Show the items of a list
    Items {
        /// List ID
        list: String,
        /// Only show items matching this filter (all, active, completed)
        #[arg(short, long)]
        filter: Option<FilterValue>,
    },
    /// Create, update, delete or move an item
    Item {
        #[command(subcommand)]
        action: ItemCommand,
    },
}

#[derive(Subcommand)]
pub enum ListCommand {
    /// Create a list
    Add {
        /// List title
        title: String,
    },
    /// Rename a list
    Rename {
        /// List ID
        id: String,
        /// New title
        title: String,
    },
    /// Delete a list and its items
    Delete {
        /// List ID
        id: String,
    },
    /// Move a list after another one (to the front without --after)
    Move {
        /// List ID
        id: String,
        /// ID of the list to place it after
        #[arg(long)]
        after: Option<String>,
    },
    /// Show a list's items through a filter (local only)
    Filter {
        /// List ID
        id: String,
        /// all, active or completed
        filter: FilterValue,
    },
}

/// Fields accepted by `item update`.
#[derive(Args, Debug, Default)]
pub struct ItemFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long, conflicts_with = "clear_description")]
    pub description: Option<String>,
    /// incomplete, in_progress, complete or draft
    #[arg(long)]
    pub status: Option<ItemStatus>,
    /// low, medium, hi, urgently or later
    #[arg(long)]
    pub priority: Option<Priority>,
    /// e.g. 2024-05-01T10:00:00
    #[arg(long, conflicts_with = "clear_start_date")]
    pub start_date: Option<NaiveDateTime>,
    /// e.g. 2024-05-01T10:00:00
    #[arg(long, conflicts_with = "clear_deadline")]
    pub deadline: Option<NaiveDateTime>,
    /// Remove the description
    #[arg(long)]
    pub clear_description: bool,
    /// Remove the start date
    #[arg(long)]
    pub clear_start_date: bool,
    /// Remove the deadline
    #[arg(long)]
    pub clear_deadline: bool,
}

impl ItemFields {
    pub fn into_patch(self) -> ItemPatch {
        let mut patch = ItemPatch {
            title: self.title,
            status: self.status,
            priority: self.priority,
            ..ItemPatch::default()
        };
        if let Some(description) = self.description {
            patch = patch.description(description);
        } else if self.clear_description {
            patch = patch.clear_description();
        }
        if let Some(start_date) = self.start_date {
            patch = patch.start_date(start_date);
        } else if self.clear_start_date {
            patch = patch.clear_start_date();
        }
        if let Some(deadline) = self.deadline {
            patch = patch.deadline(deadline);
        } else if self.clear_deadline {
            patch = patch.clear_deadline();
        }
        patch
    }
}

#[derive(Subcommand)]
pub enum ItemCommand {
    /// Create an item
    Add {
        /// List ID
        list: String,
        /// Item title
        title: String,
    },
    /// Change some fields of an item
    Update {
        /// List ID
        list: String,
        /// Item ID
        id: String,
        #[command(flatten)]
        fields: ItemFields,
    },
    /// Delete an item
    Delete {
        /// List ID
        list: String,
        /// Item ID
        id: String,
    },
    /// Move an item after another one (to the front without --after)
    Move {
        /// List ID
        list: String,
        /// Item ID
        id: String,
        /// ID of the item to place it after
        #[arg(long)]
        after: Option<String>,
    },
}
