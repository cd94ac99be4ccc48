//! Side effects of a refresh cycle.
//!
//! The orchestrator never writes history or raises notifications itself: it
//! describes them as [`Effect`]s and hands the list to an [`EffectRunner`].

use super::{EventLog, HistoryEntry, NotificationEntry};
use crate::config::StatusSourceConfig;
use crate::status::{Severity, StatusResult};
use std::sync::Arc;

/// One side effect requested by a refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RecordHistory {
        source_id: String,
        name: String,
        level: Severity,
        message: String,
    },
    RecordNotification { title: String, message: String },
}

/// Title of the notification raised for a source in the `major` tier.
pub fn down_title(source_name: &str) -> String {
    format!("{} is DOWN", source_name)
}

/// Effects for one completed refresh cycle.
///
/// Always exactly one history record; a notification is added iff the
/// severity is [`Severity::Major`].
pub fn plan_effects(source: &StatusSourceConfig, result: &StatusResult) -> Vec<Effect> {
    let mut effects = vec![Effect::RecordHistory {
        source_id: source.id.clone(),
        name: source.name.clone(),
        level: result.level,
        message: result.message.clone(),
    }];

    if result.level == Severity::Major {
        effects.push(Effect::RecordNotification {
            title: down_title(&source.name),
            message: result.message.clone(),
        });
    }

    effects
}

/// What an [`EffectRunner`] wrote.
#[derive(Debug, Clone, Default)]
pub struct EffectReport {
    pub history: Vec<HistoryEntry>,
    pub notifications: Vec<NotificationEntry>,
}

/// Executes effect lists against the event log.
#[derive(Clone)]
pub struct EffectRunner {
    log: Arc<EventLog>,
}

impl EffectRunner {
    pub fn new(log: Arc<EventLog>) -> Self {
        Self { log }
    }

    pub fn log(&self) -> &Arc<EventLog> {
        &self.log
    }

    /// Run the effects in order.
    pub fn run(&self, effects: Vec<Effect>) -> EffectReport {
        let mut report = EffectReport::default();
        for effect in effects {
            match effect {
                Effect::RecordHistory {
                    source_id,
                    name,
                    level,
                    message,
                } => {
                    report
                        .history
                        .push(self.log.record_history(&source_id, &name, level, &message));
                }
                Effect::RecordNotification { title, message } => {
                    report
                        .notifications
                        .push(self.log.record_notification(&title, &message));
                }
            }
        }
        report
    }
}
