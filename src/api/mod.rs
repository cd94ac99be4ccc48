//! # Dashboard API
//!
//! JSON endpoints over the dashboard state, for a browser front-end or
//! scripts.
//!
//! ## Endpoints
//!
//! - `GET /health` - Liveness with source counts
//! - `GET /api/widgets` - Every source with its widget state
//! - `POST /api/widgets/:id/refresh` - Refresh one source
//! - `POST /api/widgets/:id/toggle` - Enable or disable a source
//! - `POST /api/refresh` - Refresh all enabled sources
//! - `GET /api/counts` - Aggregate counts
//! - `GET /api/history` - History, most recent first (`?limit=N&source=ID`)
//! - `GET /api/notifications` / `POST /api/notifications/read`
//! - `GET /api/settings` / `PUT /api/settings/interval`
//! - `GET /api/snapshot` - Encoded public snapshot
//! - `GET /metrics` - Prometheus metrics
//!
//! ## Example
//!
//! ```no_run
//! use statuswatch::api::{create_router, AppState};
//! use statuswatch::app::Dashboard;
//! use statuswatch::config::StatusWatchConfig;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dashboard = Arc::new(Dashboard::from_config(StatusWatchConfig::default()));
//! let app = create_router(Arc::new(AppState::new(dashboard)));
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

mod events;
mod health;
mod settings;
pub mod types;
mod widgets;

pub use types::*;

use crate::app::Dashboard;
use axum::{
    routing::{get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Maximum request body size (64 KB).
const MAX_BODY_SIZE: usize = 64 * 1024;

/// Shared state accessible to all handlers.
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
    /// Prometheus handle for rendering metrics
    pub metrics: PrometheusHandle,
}

impl AppState {
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        Self {
            dashboard,
            metrics: crate::metrics::metrics_handle(),
        }
    }
}

/// Create the API router with all endpoints configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    let timeout = Duration::from_secs(state.dashboard.config.server.request_timeout_seconds);

    Router::new()
        .route("/health", get(health::handle))
        .route("/api/widgets", get(widgets::list))
        .route("/api/widgets/:id/refresh", post(widgets::refresh_one))
        .route("/api/widgets/:id/toggle", post(widgets::toggle))
        .route("/api/refresh", post(widgets::refresh_all))
        .route("/api/counts", get(widgets::counts))
        .route("/api/history", get(events::history))
        .route("/api/notifications", get(events::notifications))
        .route("/api/notifications/read", post(events::mark_read))
        .route("/api/settings", get(settings::get_settings))
        .route("/api/settings/interval", put(settings::set_interval))
        .route("/api/snapshot", get(settings::snapshot))
        .route("/metrics", get(crate::metrics::metrics_handler))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::new(timeout))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
