//! Notification log.

use super::EventLog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEntry {
    pub id: String,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub unread: bool,
}

impl NotificationEntry {
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
            unread: true,
        }
    }
}

impl EventLog {
    /// Append one notification, persist, then raise the transient alerts.
    ///
    /// Alerts run after persistence and their failures are only logged.
    pub fn record_notification(&self, title: &str, message: &str) -> NotificationEntry {
        let entry = NotificationEntry::new(title, message);
        self.store.update(|db| db.notifications.push(entry.clone()));
        metrics::counter!("statuswatch_notifications_total").increment(1);

        tracing::info!(title = title, message = message, "Notification raised");

        let settings = self.store.settings();
        if settings.popup_alerts {
            if let Err(e) = self.alerts.show_popup(title, message) {
                tracing::warn!(error = %e, "Failed to show alert popup");
            }
        }
        if settings.sound_alerts {
            if let Err(e) = self.alerts.play_sound() {
                tracing::warn!(error = %e, "Failed to play alert sound");
            }
        }

        entry
    }

    /// Notifications, most recent first.
    pub fn notifications(&self) -> Vec<NotificationEntry> {
        self.store
            .read(|db| db.notifications.iter().rev().cloned().collect())
    }

    pub fn unread_count(&self) -> usize {
        self.store
            .read(|db| db.notifications.iter().filter(|n| n.unread).count())
    }

    /// Mark every notification read. Returns how many changed.
    pub fn mark_all_read(&self) -> usize {
        if self.unread_count() == 0 {
            return 0;
        }
        self.store.update(|db| {
            let mut changed = 0;
            for notification in db.notifications.iter_mut().filter(|n| n.unread) {
                notification.unread = false;
                changed += 1;
            }
            changed
        })
    }
}
