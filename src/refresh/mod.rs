//! Widget refresh orchestration.
//!
//! A refresh cycle for one source runs: mark the widget `Checking`, fetch and
//! normalize the status, settle the widget, then hand the planned effects
//! (one history entry, plus a notification for `major`) to the
//! [`EffectRunner`]. `refresh_all` runs cycles one after another so that
//! writes to the shared database document never interleave within a pass.

mod error;
mod scheduler;
mod state;

pub use error::*;
pub use scheduler::*;
pub use state::*;

use crate::config::StatusSourceConfig;
use crate::events::{plan_effects, EffectReport, EffectRunner};
use crate::registry::SourceRegistry;
use crate::status::{Severity, StatusProbe, StatusResult};
use dashmap::DashMap;
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;

/// Result of one completed refresh cycle.
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    pub source_id: String,
    pub result: StatusResult,
    pub effects: EffectReport,
}

/// Result of a refresh-all pass.
#[derive(Debug, Clone)]
pub struct RefreshSummary {
    pub outcomes: Vec<RefreshOutcome>,
    pub counts: StatusCounts,
}

/// A source together with its widget state.
#[derive(Debug, Clone, Serialize)]
pub struct WidgetView {
    #[serde(flatten)]
    pub source: StatusSourceConfig,
    pub state: WidgetState,
    pub color: crate::status::DisplayColor,
}

/// Drives refresh cycles for the tracked (enabled) sources.
pub struct RefreshOrchestrator {
    registry: Arc<SourceRegistry>,
    probe: Arc<dyn StatusProbe>,
    runner: EffectRunner,
    widgets: DashMap<String, WidgetState>,
    counts: RwLock<StatusCounts>,
}

impl RefreshOrchestrator {
    pub fn new(
        registry: Arc<SourceRegistry>,
        probe: Arc<dyn StatusProbe>,
        runner: EffectRunner,
    ) -> Self {
        let orchestrator = Self {
            registry,
            probe,
            runner,
            widgets: DashMap::new(),
            counts: RwLock::new(StatusCounts::default()),
        };
        orchestrator.recompute_counts();
        orchestrator
    }

    pub fn registry(&self) -> &Arc<SourceRegistry> {
        &self.registry
    }

    pub fn runner(&self) -> &EffectRunner {
        &self.runner
    }

    /// Current widget state of a source (`Idle` if never refreshed).
    pub fn widget_state(&self, id: &str) -> WidgetState {
        self.widgets
            .get(id)
            .map(|w| w.value().clone())
            .unwrap_or_default()
    }

    /// Every source in catalog order with its widget state.
    pub fn widgets(&self) -> Vec<WidgetView> {
        self.registry
            .get_all_sources()
            .into_iter()
            .map(|source| {
                let state = self.widget_state(&source.id);
                let color = state.status.color();
                WidgetView {
                    source,
                    state,
                    color,
                }
            })
            .collect()
    }

    /// Counts as of the last recompute.
    pub fn counts(&self) -> StatusCounts {
        *self.counts.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Recount widget states over the enabled sources.
    pub fn recompute_counts(&self) -> StatusCounts {
        let statuses: Vec<WidgetStatus> = self
            .registry
            .get_enabled_sources()
            .iter()
            .map(|s| self.widget_state(&s.id).status)
            .collect();
        let counts = StatusCounts::tally(statuses.iter());

        for (label, value) in [
            ("ok", counts.ok),
            ("warning", counts.warning),
            ("major", counts.major),
            ("unknown", counts.unknown),
        ] {
            metrics::gauge!("statuswatch_sources", "level" => label).set(value as f64);
        }

        *self.counts.write().unwrap_or_else(PoisonError::into_inner) = counts;
        counts
    }

    /// Run one refresh cycle for `id`.
    ///
    /// The widget is marked `Checking` before the first await. The rest of
    /// the cycle runs in its own task, so dropping the returned future does
    /// not stop the widget from settling or the history entry from being
    /// written. If the fetch task dies instead of returning, the widget
    /// settles as `unknown` / "Unable to load" and the cycle still records
    /// its history entry.
    pub async fn refresh_one(self: &Arc<Self>, id: &str) -> Result<RefreshOutcome, RefreshError> {
        let source = self
            .registry
            .get_source(id)
            .ok_or_else(|| RefreshError::SourceNotFound(id.to_string()))?;
        if !source.enabled {
            return Err(RefreshError::SourceDisabled(id.to_string()));
        }

        self.widgets
            .entry(source.id.clone())
            .or_default()
            .begin_check();

        let orchestrator = Arc::clone(self);
        tokio::spawn(async move { orchestrator.run_cycle(source).await })
            .await
            .map_err(|e| RefreshError::CycleFailed(e.to_string()))
    }

    /// Refresh every enabled source, one at a time, then recompute counts.
    ///
    /// The pass runs in its own task and completes even if the caller stops
    /// waiting for it.
    pub async fn refresh_all(self: &Arc<Self>) -> RefreshSummary {
        let orchestrator = Arc::clone(self);
        match tokio::spawn(async move { orchestrator.run_pass().await }).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::error!(error = %e, "Refresh pass failed");
                RefreshSummary {
                    outcomes: Vec::new(),
                    counts: self.recompute_counts(),
                }
            }
        }
    }

    async fn run_pass(self: Arc<Self>) -> RefreshSummary {
        let sources = self.registry.get_enabled_sources();
        let mut outcomes = Vec::with_capacity(sources.len());

        for source in sources {
            match self.refresh_one(&source.id).await {
                Ok(outcome) => outcomes.push(outcome),
                // toggled off or removed since the pass started
                Err(e) => tracing::debug!(source_id = %source.id, error = %e, "Skipped source"),
            }
        }

        let counts = self.recompute_counts();
        tracing::debug!(
            refreshed = outcomes.len(),
            ok = counts.ok,
            warning = counts.warning,
            major = counts.major,
            unknown = counts.unknown,
            "Refresh cycle completed"
        );

        RefreshSummary { outcomes, counts }
    }

    /// Fetch, settle, and apply effects for a source already marked
    /// `Checking`.
    async fn run_cycle(&self, source: StatusSourceConfig) -> RefreshOutcome {
        let start = Instant::now();
        let probe = Arc::clone(&self.probe);
        let url = source.api.clone();
        let result = match tokio::spawn(async move { probe.fetch_status(&url).await }).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(source_id = %source.id, error = %e, "Refresh pipeline failed");
                StatusResult::new(Severity::Unknown, MSG_UNABLE_TO_LOAD)
            }
        };

        self.widgets
            .entry(source.id.clone())
            .or_default()
            .settle(&result);

        metrics::counter!("statuswatch_refresh_total",
            "source" => source.id.clone(),
            "level" => result.level.as_str()
        )
        .increment(1);

        tracing::info!(
            source_id = %source.id,
            level = %result.level,
            message = %result.message,
            duration_ms = start.elapsed().as_millis() as u64,
            "Source refreshed"
        );

        let effects = self.runner.run(plan_effects(&source, &result));

        RefreshOutcome {
            source_id: source.id,
            result,
            effects,
        }
    }
}
