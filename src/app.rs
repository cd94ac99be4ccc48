//! Application state.
//!
//! [`Dashboard`] wires the components together once at startup and is then
//! shared by reference (`Arc<Dashboard>`) with the API handlers, the CLI and
//! the scheduler.

use crate::config::StatusWatchConfig;
use crate::events::{AlertSink, EffectRunner, EventLog, TerminalAlertSink};
use crate::refresh::{RefreshOrchestrator, RefreshScheduler};
use crate::registry::SourceRegistry;
use crate::snapshot::PublicSnapshot;
use crate::status::{HttpStatusFetcher, StatusProbe};
use crate::store::{open_store, DashboardStore, KeyValueStore, Settings};
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;

pub struct Dashboard {
    pub config: Arc<StatusWatchConfig>,
    pub store: Arc<DashboardStore>,
    pub registry: Arc<SourceRegistry>,
    pub events: Arc<EventLog>,
    pub orchestrator: Arc<RefreshOrchestrator>,
    pub scheduler: RefreshScheduler,
    pub shutdown: CancellationToken,
    pub start_time: Instant,
}

impl Dashboard {
    /// Build the dashboard with the store, fetcher and alerts named by the
    /// configuration.
    pub fn from_config(config: StatusWatchConfig) -> Self {
        let kv = open_store(&config.store);
        Self::bootstrap(
            config,
            kv,
            Arc::new(HttpStatusFetcher::new()),
            Arc::new(TerminalAlertSink),
        )
    }

    /// Build the dashboard from explicit collaborators.
    pub fn bootstrap(
        config: StatusWatchConfig,
        kv: Arc<dyn KeyValueStore>,
        probe: Arc<dyn StatusProbe>,
        alerts: Arc<dyn AlertSink>,
    ) -> Self {
        let default_settings = Settings::from_config(config.refresh.interval_seconds, config.alerts);
        let store = Arc::new(DashboardStore::open(kv, default_settings));

        let integrations = config.resolve_integrations();
        if !integrations.is_empty() {
            tracing::info!(count = integrations.len(), "Loaded integrations");
            store.update(|db| db.integrations = integrations);
        }

        let registry = Arc::new(SourceRegistry::load(config.resolve_sources(), store.clone()));
        let events = Arc::new(EventLog::new(store.clone(), alerts));
        let orchestrator = Arc::new(RefreshOrchestrator::new(
            registry.clone(),
            probe,
            EffectRunner::new(events.clone()),
        ));

        let shutdown = CancellationToken::new();
        let scheduler = RefreshScheduler::new(orchestrator.clone(), store.clone(), shutdown.clone());

        Self {
            config: Arc::new(config),
            store,
            registry,
            events,
            orchestrator,
            scheduler,
            shutdown,
            start_time: Instant::now(),
        }
    }

    /// Capture a public snapshot of the current state.
    pub fn snapshot(&self) -> PublicSnapshot {
        PublicSnapshot::build(&self.registry, &self.events)
    }
}
