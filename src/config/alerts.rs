//! Alert defaults

use serde::{Deserialize, Serialize};

/// Default alert preferences, used until the settings document records the
/// user's own choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Show a transient popup for new notifications
    pub popup: bool,
    /// Play the alert sound for new notifications
    pub sound: bool,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            popup: true,
            sound: true,
        }
    }
}
