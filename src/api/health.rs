//! Health check endpoint handler.

use crate::api::AppState;
use crate::refresh::StatusCounts;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub sources: StatusCounts,
    pub refresh_timer: bool,
}

/// GET /health - liveness plus the last computed counts.
pub async fn handle(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let dashboard = &state.dashboard;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: dashboard.start_time.elapsed().as_secs(),
        sources: dashboard.orchestrator.counts(),
        refresh_timer: dashboard.scheduler.is_running(),
    })
}
