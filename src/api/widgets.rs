//! Widget endpoints: listing, refreshing and toggling sources.

use super::types::{ApiError, RefreshAllResponse, RefreshResponse};
use crate::api::AppState;
use crate::refresh::{StatusCounts, WidgetView};
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

/// GET /api/widgets
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<WidgetView>> {
    Json(state.dashboard.orchestrator.widgets())
}

/// GET /api/counts
pub async fn counts(State(state): State<Arc<AppState>>) -> Json<StatusCounts> {
    Json(state.dashboard.orchestrator.counts())
}

/// POST /api/widgets/:id/refresh
pub async fn refresh_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let orchestrator = &state.dashboard.orchestrator;
    let outcome = orchestrator.refresh_one(&id).await?;
    let widget = orchestrator.widget_state(&outcome.source_id);

    Ok(Json(RefreshResponse {
        id: outcome.source_id,
        result: outcome.result,
        state: widget,
        history_written: outcome.effects.history.len(),
        notifications_written: outcome.effects.notifications.len(),
    }))
}

/// POST /api/refresh
pub async fn refresh_all(State(state): State<Arc<AppState>>) -> Json<RefreshAllResponse> {
    let summary = state.dashboard.orchestrator.refresh_all().await;
    Json(RefreshAllResponse {
        refreshed: summary.outcomes.len(),
        counts: summary.counts,
    })
}

/// POST /api/widgets/:id/toggle
pub async fn toggle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<WidgetView>, ApiError> {
    let dashboard = &state.dashboard;
    let source = dashboard.registry.toggle_source(&id)?;
    dashboard.orchestrator.recompute_counts();

    let widget = dashboard.orchestrator.widget_state(&source.id);
    let color = widget.status.color();
    Ok(Json(WidgetView {
        source,
        state: widget,
        color,
    }))
}
