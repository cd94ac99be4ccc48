//! Settings and snapshot endpoints.

use super::types::{ApiError, IntervalRequest, SnapshotResponse};
use crate::api::AppState;
use crate::store::Settings;
use axum::{extract::State, Json};
use std::sync::Arc;

/// GET /api/settings
pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<Settings> {
    Json(state.dashboard.store.settings())
}

/// PUT /api/settings/interval
pub async fn set_interval(
    State(state): State<Arc<AppState>>,
    Json(request): Json<IntervalRequest>,
) -> Result<Json<Settings>, ApiError> {
    state
        .dashboard
        .scheduler
        .set_interval(request.seconds)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    Ok(Json(state.dashboard.store.settings()))
}

/// GET /api/snapshot
pub async fn snapshot(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SnapshotResponse>, ApiError> {
    let snapshot = state.dashboard.snapshot();
    let encoded = snapshot
        .encode()
        .map_err(|e| ApiError::internal(e.to_string()))?;
    let fragment = format!("{}{}", crate::snapshot::FRAGMENT_PREFIX, encoded);
    Ok(Json(SnapshotResponse { encoded, fragment }))
}
