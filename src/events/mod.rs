//! History and notification emitters.
//!
//! [`EventLog`] owns the append-only history and notification sequences of
//! the database document; [`EffectRunner`] applies the effects planned by a
//! refresh cycle to it.

mod alerts;
mod effects;
mod history;
mod notification;

pub use alerts::*;
pub use effects::*;
pub use history::*;
pub use notification::*;

use crate::store::DashboardStore;
use std::sync::Arc;

/// Append-only event log backed by the dashboard store.
pub struct EventLog {
    store: Arc<DashboardStore>,
    alerts: Arc<dyn AlertSink>,
}

impl EventLog {
    pub fn new(store: Arc<DashboardStore>, alerts: Arc<dyn AlertSink>) -> Self {
        Self { store, alerts }
    }

    pub fn store(&self) -> &Arc<DashboardStore> {
        &self.store
    }
}
