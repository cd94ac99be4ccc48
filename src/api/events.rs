//! History and notification endpoints.

use super::types::{
    HistoryQuery, HistoryResponse, MarkReadResponse, NotificationsResponse,
};
use crate::api::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

/// GET /api/history?limit=N&source=ID - most recent first
pub async fn history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> Json<HistoryResponse> {
    let events = &state.dashboard.events;
    let history = match query.source {
        Some(source) => {
            let mut entries = events.history_for(&source);
            if let Some(limit) = query.limit {
                entries.truncate(limit);
            }
            entries
        }
        None => events.recent_history(query.limit),
    };
    Json(HistoryResponse { history })
}

/// GET /api/notifications
pub async fn notifications(State(state): State<Arc<AppState>>) -> Json<NotificationsResponse> {
    let events = &state.dashboard.events;
    Json(NotificationsResponse {
        unread: events.unread_count(),
        notifications: events.notifications(),
    })
}

/// POST /api/notifications/read
pub async fn mark_read(State(state): State<Arc<AppState>>) -> Json<MarkReadResponse> {
    Json(MarkReadResponse {
        marked: state.dashboard.events.mark_all_read(),
    })
}
