//! Persisted documents: user settings and the dashboard database.

use crate::config::{AlertConfig, IntegrationConfig, StatusSourceConfig};
use crate::events::{HistoryEntry, NotificationEntry};
use serde::{Deserialize, Serialize};

/// Key of the settings document.
pub const SETTINGS_KEY: &str = "statuswatch.settings";
/// Key of the database document.
pub const DATABASE_KEY: &str = "statuswatch.db";

/// User preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Seconds between automatic refresh-all cycles
    pub refresh_interval: u64,
    pub popup_alerts: bool,
    pub sound_alerts: bool,
    pub theme: String,
    /// Client-side view toggle, not an access control
    pub role: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            refresh_interval: 60,
            popup_alerts: true,
            sound_alerts: true,
            theme: "light".to_string(),
            role: "admin".to_string(),
        }
    }
}

impl Settings {
    /// Settings seeded from configuration, used when none are stored.
    pub fn from_config(interval_seconds: u64, alerts: AlertConfig) -> Self {
        Self {
            refresh_interval: interval_seconds,
            popup_alerts: alerts.popup,
            sound_alerts: alerts.sound,
            ..Self::default()
        }
    }
}

/// The dashboard database document.
///
/// `users`, `logs`, `featureFlags` and `analyticsCache` belong to other parts
/// of the dashboard; they are carried through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Database {
    /// Last known catalog, used to restore enabled flags
    pub status_pages: Vec<StatusSourceConfig>,
    pub integrations: Vec<IntegrationConfig>,
    pub users: Vec<serde_json::Value>,
    /// Append-only, oldest first
    pub history: Vec<HistoryEntry>,
    /// Append-only, oldest first
    pub notifications: Vec<NotificationEntry>,
    pub logs: Vec<serde_json::Value>,
    pub feature_flags: serde_json::Map<String, serde_json::Value>,
    pub analytics_cache: serde_json::Map<String, serde_json::Value>,
    /// Sources added at runtime rather than through configuration
    pub custom_services: Vec<StatusSourceConfig>,
}
