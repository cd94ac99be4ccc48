//! Metrics HTTP handler.

use crate::api::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Handler for GET /metrics (Prometheus text format).
///
/// Gauges are refreshed from the current widget states before rendering.
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.dashboard.orchestrator.recompute_counts();

    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        state.metrics.render(),
    )
}
