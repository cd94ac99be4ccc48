//! Request and response types for the dashboard API.

use crate::events::{HistoryEntry, NotificationEntry};
use crate::refresh::{RefreshError, StatusCounts, WidgetState};
use crate::registry::RegistryError;
use crate::status::StatusResult;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error envelope: `{"error": {"message": ..., "type": ...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorBody,
    #[serde(skip)]
    status: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    pub r#type: String,
}

impl ApiError {
    fn new(status: StatusCode, kind: &str, message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorBody {
                message: message.into(),
                r#type: kind.to_string(),
            },
            status: Some(status.as_u16()),
        }
    }

    /// Create a bad request error (400).
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid_request_error", message)
    }

    /// Create a not found error (404).
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found_error", message)
    }

    /// Create an internal error (500).
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
            .and_then(|s| StatusCode::from_u16(s).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<RefreshError> for ApiError {
    fn from(e: RefreshError) -> Self {
        match e {
            RefreshError::SourceNotFound(_) => Self::not_found(e.to_string()),
            RefreshError::SourceDisabled(_) => Self::bad_request(e.to_string()),
            RefreshError::CycleFailed(_) => Self::internal(e.to_string()),
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::SourceNotFound(_) => Self::not_found(e.to_string()),
            RegistryError::DuplicateSource(_) | RegistryError::InvalidSource(_) => {
                Self::bad_request(e.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

/// Response to a single-source refresh.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub id: String,
    pub result: StatusResult,
    pub state: WidgetState,
    pub history_written: usize,
    pub notifications_written: usize,
}

/// Response to a refresh-all.
#[derive(Debug, Serialize)]
pub struct RefreshAllResponse {
    pub refreshed: usize,
    pub counts: StatusCounts,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
    pub source: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct NotificationsResponse {
    pub unread: usize,
    pub notifications: Vec<NotificationEntry>,
}

#[derive(Debug, Serialize)]
pub struct MarkReadResponse {
    pub marked: usize,
}

#[derive(Debug, Deserialize)]
pub struct IntervalRequest {
    pub seconds: u64,
}

#[derive(Debug, Serialize)]
pub struct SnapshotResponse {
    pub encoded: String,
    pub fragment: String,
}
