//! Output formatting helpers for CLI commands

use crate::config::StatusSourceConfig;
use crate::events::{HistoryEntry, NotificationEntry};
use crate::refresh::{StatusCounts, WidgetStatus, WidgetView};
use crate::snapshot::PublicSnapshot;
use crate::status::Severity;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde::Serialize;
use serde_json::json;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

fn colored_severity(level: Severity) -> String {
    match level {
        Severity::Ok => "ok".green().to_string(),
        Severity::Warning => "warning".yellow().to_string(),
        Severity::Major => "major".red().to_string(),
        Severity::Unknown => "unknown".dimmed().to_string(),
    }
}

fn colored_status(status: WidgetStatus) -> String {
    match status {
        WidgetStatus::Ok => "● ok".green().to_string(),
        WidgetStatus::Warning => "● warning".yellow().to_string(),
        WidgetStatus::Major => "● major".red().to_string(),
        WidgetStatus::Unknown => "● unknown".dimmed().to_string(),
        WidgetStatus::Checking => "… checking".cyan().to_string(),
        WidgetStatus::Idle => "○ idle".dimmed().to_string(),
    }
}

fn enabled_marker(enabled: bool) -> String {
    if enabled {
        "yes".green().to_string()
    } else {
        "no".dimmed().to_string()
    }
}

/// Format widgets as a table
pub fn format_widgets_table(widgets: &[WidgetView]) -> String {
    let mut table = new_table(vec!["Source", "Env", "Status", "Message", "Last Checked"]);

    for w in widgets.iter().filter(|w| w.source.enabled) {
        let last_checked = w
            .state
            .last_checked
            .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            Cell::new(&w.source.name),
            Cell::new(&w.source.env),
            Cell::new(colored_status(w.state.status)),
            Cell::new(&w.state.message),
            Cell::new(last_checked),
        ]);
    }

    table.to_string()
}

/// One-line summary of the aggregate counts
pub fn format_counts(counts: &StatusCounts) -> String {
    format!(
        "{} sources: {} ok, {} warning, {} major, {} unknown",
        counts.total,
        counts.ok.to_string().green(),
        counts.warning.to_string().yellow(),
        counts.major.to_string().red(),
        counts.unknown,
    )
}

/// Format widgets and counts as JSON
pub fn format_widgets_json(widgets: &[WidgetView], counts: &StatusCounts) -> String {
    to_json(&json!({
        "widgets": widgets,
        "counts": counts,
    }))
}

/// Format sources as a table
pub fn format_sources_table(sources: &[StatusSourceConfig]) -> String {
    let mut table = new_table(vec!["ID", "Name", "Env", "Category", "Enabled", "API"]);

    for s in sources {
        table.add_row(vec![
            Cell::new(&s.id),
            Cell::new(&s.name),
            Cell::new(&s.env),
            Cell::new(s.category.as_deref().unwrap_or("-")),
            Cell::new(enabled_marker(s.enabled)),
            Cell::new(&s.api),
        ]);
    }

    table.to_string()
}

/// Format sources as JSON
pub fn format_sources_json(sources: &[StatusSourceConfig]) -> String {
    to_json(&json!({ "sources": sources }))
}

/// Format history entries as a table
pub fn format_history_table(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded yet.".to_string();
    }

    let mut table = new_table(vec!["Time", "Source", "Level", "Message"]);
    for e in entries {
        table.add_row(vec![
            Cell::new(e.timestamp.format(TIMESTAMP_FORMAT).to_string()),
            Cell::new(&e.name),
            Cell::new(colored_severity(e.level)),
            Cell::new(&e.message),
        ]);
    }

    table.to_string()
}

/// Format history entries as JSON
pub fn format_history_json(entries: &[HistoryEntry]) -> String {
    to_json(&json!({ "history": entries }))
}

/// Format notifications as a table
pub fn format_notifications_table(entries: &[NotificationEntry]) -> String {
    if entries.is_empty() {
        return "No notifications.".to_string();
    }

    let mut table = new_table(vec!["", "Time", "Title", "Message"]);
    for n in entries {
        let marker = if n.unread {
            "●".red().to_string()
        } else {
            " ".to_string()
        };
        table.add_row(vec![
            Cell::new(marker),
            Cell::new(n.timestamp.format(TIMESTAMP_FORMAT).to_string()),
            Cell::new(&n.title),
            Cell::new(&n.message),
        ]);
    }

    table.to_string()
}

/// Format notifications as JSON
pub fn format_notifications_json(entries: &[NotificationEntry], unread: usize) -> String {
    to_json(&json!({
        "notifications": entries,
        "unread": unread,
    }))
}

/// Human-readable rendering of a decoded snapshot
pub fn format_snapshot(snapshot: &PublicSnapshot) -> String {
    let mut out = format!(
        "Snapshot created {}\n\n",
        snapshot.created.format(TIMESTAMP_FORMAT)
    );
    out.push_str(&format_sources_table(&snapshot.widgets));
    out.push('\n');
    out.push_str(&format_history_table(&snapshot.history));
    out
}

/// Format a decoded snapshot as JSON
pub fn format_snapshot_json(snapshot: &PublicSnapshot) -> String {
    to_json(snapshot)
}
