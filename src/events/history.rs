//! Status history log.

use super::EventLog;
use crate::status::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    /// Source the cycle ran for (not owned; the source may be gone)
    pub source_id: String,
    /// Source name at the time of writing
    pub name: String,
    pub level: Severity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(source_id: &str, name: &str, level: Severity, message: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            source_id: source_id.to_string(),
            name: name.to_string(),
            level,
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl EventLog {
    /// Append one history entry and persist.
    pub fn record_history(
        &self,
        source_id: &str,
        name: &str,
        level: Severity,
        message: &str,
    ) -> HistoryEntry {
        let entry = HistoryEntry::new(source_id, name, level, message);
        self.store.update(|db| db.history.push(entry.clone()));

        tracing::debug!(
            source_id = source_id,
            level = %level,
            "Recorded history entry"
        );
        entry
    }

    /// Full history, oldest first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.store.read(|db| db.history.clone())
    }

    /// Most recent entries first, optionally capped at `limit`.
    pub fn recent_history(&self, limit: Option<usize>) -> Vec<HistoryEntry> {
        self.store.read(|db| {
            let take = limit.unwrap_or(db.history.len());
            db.history.iter().rev().take(take).cloned().collect()
        })
    }

    /// History for a single source, most recent first.
    pub fn history_for(&self, source_id: &str) -> Vec<HistoryEntry> {
        self.store.read(|db| {
            db.history
                .iter()
                .rev()
                .filter(|e| e.source_id == source_id)
                .cloned()
                .collect()
        })
    }
}
