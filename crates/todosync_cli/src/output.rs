//! Terminal output helpers: styled text for humans, structured JSON for machines.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for lists and items
//! - `indicatif` for spinners while a call is in flight

use std::sync::atomic::{AtomicBool, Ordering};

use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::Value as JsonValue;
use todosync_core::{AppStatus, RequestStatus};

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── JSON envelope ──────────────────────────────────────────────────

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn emit_json(level: &str, message: &str, data: Option<&JsonValue>) {
    let msg = Msg {
        level,
        message,
        data,
    };
    let json = serde_json::to_string(&msg)
        .unwrap_or_else(|_| format!("{{\"level\":\"{level}\",\"message\":\"{message}\"}}"));
    println!("{json}");
}

// ── Public helpers ─────────────────────────────────────────────────

pub fn header(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn error(text: &str) {
    if is_json() {
        let msg = Msg {
            level: "error",
            message: text,
            data: None,
        };
        let json = serde_json::to_string(&msg).unwrap_or_default();
        eprintln!("{json}");
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn dim(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).dim());
    }
}

/// Global request status and error slot.
pub fn app_status(app: &AppStatus) {
    if is_json() {
        let data = serde_json::to_value(app).unwrap_or(JsonValue::Null);
        emit_json("status", app.status.as_str(), Some(&data));
        return;
    }
    let status = match app.status {
        RequestStatus::Succeeded => style(app.status.as_str()).green(),
        RequestStatus::Failed => style(app.status.as_str()).red(),
        RequestStatus::Loading => style(app.status.as_str()).yellow(),
        RequestStatus::Idle => style(app.status.as_str()).dim(),
    };
    println!("  {} {}", style("status").cyan().bold(), status);
    if let Some(error) = &app.error {
        println!("  {} {}", style("error").cyan().bold(), style(error).red());
    }
}

// ── Tables ─────────────────────────────────────────────────────────

/// Create a styled table with a bold cyan header row.
pub fn table(columns: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            columns
                .iter()
                .map(|col| Cell::new(col).fg(Color::Cyan).add_attribute(Attribute::Bold)),
        );
    table
}

/// Add a row; the first column is highlighted.
pub fn table_row(table: &mut Table, cells: &[String]) {
    let row = cells.iter().enumerate().map(|(idx, text)| {
        if idx == 0 {
            Cell::new(text).fg(Color::Green)
        } else {
            Cell::new(text)
        }
    });
    table.add_row(row);
}

/// Print a table (JSON mode emits `data` instead).
pub fn table_print<T: Serialize>(table: &Table, label: &str, data: &T) {
    if is_json() {
        let value = serde_json::to_value(data).unwrap_or(JsonValue::Null);
        emit_json("list", label, Some(&value));
    } else {
        println!("{table}");
    }
}

// ── Spinners ───────────────────────────────────────────────────────

/// Create a spinner for async operations. Hidden in JSON mode.
pub fn spinner(message: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(template);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Finish spinner with success message.
pub fn spinner_success(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    if is_json() {
        emit_json("success", message, None);
    } else {
        println!("{} {}", style("✓").green(), message);
    }
}

/// Finish spinner with error message.
pub fn spinner_error(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    if is_json() {
        emit_json("error", message, None);
    } else {
        eprintln!("{} {}", style("✗").red(), message);
    }
}
