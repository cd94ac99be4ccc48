//! Periodic refresh configuration

use serde::{Deserialize, Serialize};

/// Longest accepted refresh interval (one day).
pub const MAX_INTERVAL_SECONDS: u64 = 86_400;

/// Configuration for the periodic refresh timer.
///
/// `interval_seconds` is only the initial value: a user-chosen interval stored
/// in the settings document takes precedence once present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub enabled: bool,
    pub interval_seconds: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_seconds: 60,
        }
    }
}
