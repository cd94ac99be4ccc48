//! Shared test utilities for statuswatch integration tests.
//!
//! Provides source builders, scripted probes and a dashboard wired to an
//! in-memory store.

#![allow(dead_code)]

use async_trait::async_trait;
use statuswatch::api::{create_router, AppState};
use statuswatch::app::Dashboard;
use statuswatch::config::{StatusSourceConfig, StatusWatchConfig};
use statuswatch::events::{AlertError, AlertSink, SilentAlertSink};
use statuswatch::status::{Severity, StatusProbe, StatusResult};
use statuswatch::store::{KeyValueStore, MemoryStore};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// =============================================================================
// Source Builders
// =============================================================================

/// Create an enabled source with an api URL derived from its id.
pub fn make_source(id: &str) -> StatusSourceConfig {
    StatusSourceConfig {
        id: id.to_string(),
        name: format!("{} service", id),
        api: format!("https://{}.example/api/status.json", id),
        page: format!("https://{}.example", id),
        enabled: true,
        env: "prod".to_string(),
        category: None,
    }
}

/// Create a disabled source.
pub fn make_disabled_source(id: &str) -> StatusSourceConfig {
    StatusSourceConfig {
        enabled: false,
        ..make_source(id)
    }
}

// =============================================================================
// Probes
// =============================================================================

/// Returns a scripted result per URL; unknown URLs are unreachable.
#[derive(Default)]
pub struct ScriptedProbe {
    results: Mutex<HashMap<String, StatusResult>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl ScriptedProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// Script the result for a source built by [`make_source`].
    pub fn set(&self, id: &str, level: Severity, message: &str) {
        self.results.lock().unwrap().insert(
            make_source(id).api,
            StatusResult::new(level, message),
        );
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatusProbe for ScriptedProbe {
    async fn fetch_status(&self, url: &str) -> StatusResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.results
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(StatusResult::unreachable)
    }
}

/// A probe whose fetch task dies.
pub struct PanickingProbe;

#[async_trait]
impl StatusProbe for PanickingProbe {
    async fn fetch_status(&self, _url: &str) -> StatusResult {
        panic!("probe exploded");
    }
}

// =============================================================================
// Alerts
// =============================================================================

/// Counts popups and sounds.
#[derive(Default)]
pub struct RecordingAlerts {
    pub popups: Mutex<Vec<String>>,
    pub sounds: AtomicUsize,
}

impl AlertSink for RecordingAlerts {
    fn show_popup(&self, title: &str, _message: &str) -> Result<(), AlertError> {
        self.popups.lock().unwrap().push(title.to_string());
        Ok(())
    }

    fn play_sound(&self) -> Result<(), AlertError> {
        self.sounds.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// =============================================================================
// Dashboard Builders
// =============================================================================

pub fn make_config(sources: Vec<StatusSourceConfig>) -> StatusWatchConfig {
    StatusWatchConfig {
        sources,
        ..Default::default()
    }
}

/// Dashboard over an in-memory store with silent alerts.
pub fn make_dashboard(sources: Vec<StatusSourceConfig>, probe: Arc<dyn StatusProbe>) -> Arc<Dashboard> {
    make_dashboard_with(
        make_config(sources),
        Arc::new(MemoryStore::new()),
        probe,
        Arc::new(SilentAlertSink),
    )
}

pub fn make_dashboard_with(
    config: StatusWatchConfig,
    kv: Arc<dyn KeyValueStore>,
    probe: Arc<dyn StatusProbe>,
    alerts: Arc<dyn AlertSink>,
) -> Arc<Dashboard> {
    Arc::new(Dashboard::bootstrap(config, kv, probe, alerts))
}

/// Router over a dashboard.
pub fn make_app(dashboard: Arc<Dashboard>) -> axum::Router {
    create_router(Arc::new(AppState::new(dashboard)))
}
