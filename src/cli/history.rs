//! History and notifications command implementation

use crate::cli::output::{
    format_history_json, format_history_table, format_notifications_json,
    format_notifications_table,
};
use crate::cli::{HistoryArgs, NotificationsArgs};
use crate::events::EventLog;

/// Handle `statuswatch history`
pub fn handle_history(
    args: &HistoryArgs,
    events: &EventLog,
) -> Result<String, Box<dyn std::error::Error>> {
    let entries = match args.source {
        Some(ref id) => {
            let mut entries = events.history_for(id);
            entries.truncate(args.limit);
            entries
        }
        None => events.recent_history(Some(args.limit)),
    };

    if args.json {
        Ok(format_history_json(&entries))
    } else {
        Ok(format_history_table(&entries))
    }
}

/// Handle `statuswatch notifications`
pub fn handle_notifications(
    args: &NotificationsArgs,
    events: &EventLog,
) -> Result<String, Box<dyn std::error::Error>> {
    let entries = events.notifications();
    let unread = events.unread_count();

    let output = if args.json {
        format_notifications_json(&entries, unread)
    } else {
        format!(
            "{}\n{} unread",
            format_notifications_table(&entries),
            unread
        )
    };

    if args.mark_read {
        events.mark_all_read();
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing::{source, test_dashboard};
    use crate::status::Severity;
    use std::path::PathBuf;

    fn history_args(limit: usize, source: Option<&str>) -> HistoryArgs {
        HistoryArgs {
            limit,
            source: source.map(String::from),
            json: true,
            config: PathBuf::from("unused.toml"),
        }
    }

    #[test]
    fn test_history_most_recent_first_with_limit() {
        let dashboard = test_dashboard(vec![source("payments", true)], "{}");
        for message in ["first", "second", "third"] {
            dashboard
                .events
                .record_history("payments", "Payments", Severity::Ok, message);
        }

        let output = handle_history(&history_args(2, None), &dashboard.events).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let history = parsed["history"].as_array().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0]["message"], "third");
        assert_eq!(history[1]["message"], "second");
    }

    #[test]
    fn test_history_filtered_by_source() {
        let dashboard = test_dashboard(vec![], "{}");
        dashboard
            .events
            .record_history("payments", "Payments", Severity::Ok, "fine");
        dashboard
            .events
            .record_history("search", "Search", Severity::Major, "down");

        let output =
            handle_history(&history_args(10, Some("search")), &dashboard.events).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let history = parsed["history"].as_array().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0]["sourceId"], "search");
    }

    #[test]
    fn test_notifications_mark_read() {
        let dashboard = test_dashboard(vec![], "{}");
        dashboard
            .events
            .record_notification("Payments is DOWN", "Major outage");
        let args = NotificationsArgs {
            mark_read: true,
            json: true,
            config: PathBuf::from("unused.toml"),
        };

        let output = handle_notifications(&args, &dashboard.events).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["unread"], 1);
        assert_eq!(dashboard.events.unread_count(), 0);
    }
}
