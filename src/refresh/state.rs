//! Per-widget refresh state.

use crate::status::{display_color, DisplayColor, Severity, StatusResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MSG_CHECKING: &str = "Checking...";
pub const MSG_UNABLE_TO_LOAD: &str = "Unable to load";

/// Observable status of a widget.
///
/// `Idle` until the first refresh, `Checking` while a fetch is in flight,
/// then one of the settled values. Every refresh re-enters `Checking`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetStatus {
    Idle,
    Checking,
    Ok,
    Warning,
    Major,
    Unknown,
}

impl WidgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetStatus::Idle => "idle",
            WidgetStatus::Checking => "checking",
            WidgetStatus::Ok => "ok",
            WidgetStatus::Warning => "warning",
            WidgetStatus::Major => "major",
            WidgetStatus::Unknown => "unknown",
        }
    }

    pub fn color(&self) -> DisplayColor {
        display_color(self.as_str())
    }
}

impl From<Severity> for WidgetStatus {
    fn from(level: Severity) -> Self {
        match level {
            Severity::Ok => WidgetStatus::Ok,
            Severity::Warning => WidgetStatus::Warning,
            Severity::Major => WidgetStatus::Major,
            Severity::Unknown => WidgetStatus::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetState {
    pub status: WidgetStatus,
    pub message: String,
    /// When the last refresh settled
    pub last_checked: Option<DateTime<Utc>>,
}

impl WidgetState {
    pub fn idle() -> Self {
        Self {
            status: WidgetStatus::Idle,
            message: String::new(),
            last_checked: None,
        }
    }

    /// Enter `Checking`, keeping the time of the previous settle.
    pub fn begin_check(&mut self) {
        self.status = WidgetStatus::Checking;
        self.message = MSG_CHECKING.to_string();
    }

    pub fn settle(&mut self, result: &StatusResult) {
        self.status = result.level.into();
        self.message = result.message.clone();
        self.last_checked = Some(Utc::now());
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Aggregate widget counts across tracked sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub ok: usize,
    pub warning: usize,
    pub major: usize,
    pub unknown: usize,
    pub checking: usize,
    pub idle: usize,
}

impl StatusCounts {
    pub fn tally<'a>(statuses: impl IntoIterator<Item = &'a WidgetStatus>) -> Self {
        let mut counts = Self::default();
        for status in statuses {
            counts.total += 1;
            match status {
                WidgetStatus::Ok => counts.ok += 1,
                WidgetStatus::Warning => counts.warning += 1,
                WidgetStatus::Major => counts.major += 1,
                WidgetStatus::Unknown => counts.unknown += 1,
                WidgetStatus::Checking => counts.checking += 1,
                WidgetStatus::Idle => counts.idle += 1,
            }
        }
        counts
    }
}
