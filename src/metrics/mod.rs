//! # Metrics
//!
//! Prometheus export of refresh activity.
//!
//! **Counters:**
//! - `statuswatch_refresh_total{source, level}` - Completed refresh cycles
//! - `statuswatch_notifications_total` - Notifications raised
//!
//! **Histograms:**
//! - `statuswatch_fetch_duration_seconds` - Status fetch duration
//!
//! **Gauges:**
//! - `statuswatch_sources{level}` - Tracked sources per severity

mod handler;

pub use handler::metrics_handler;

use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the global Prometheus recorder.
pub fn setup_metrics() -> Result<PrometheusHandle, BuildError> {
    let fetch_buckets = &[0.05, 0.1, 0.25, 0.5, 1.0, 2.0, 4.0, 8.0];

    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("statuswatch_fetch_duration_seconds".to_string()),
            fetch_buckets,
        )?
        .install_recorder()
}

/// Handle to the process-wide recorder, installing it on first use.
///
/// If another recorder is already installed (e.g. in tests), a detached
/// recorder's handle is returned instead; it renders an empty page.
pub fn metrics_handle() -> PrometheusHandle {
    HANDLE
        .get_or_init(|| {
            setup_metrics().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "Metrics recorder unavailable, using detached handle");
                PrometheusBuilder::new().build_recorder().handle()
            })
        })
        .clone()
}
