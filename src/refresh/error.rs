//! Error types for refresh orchestration.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum RefreshError {
    #[error("source not found: {0}")]
    SourceNotFound(String),

    #[error("source is disabled: {0}")]
    SourceDisabled(String),

    #[error("refresh cycle failed: {0}")]
    CycleFailed(String),
}

#[derive(Debug, Clone, Error)]
pub enum SchedulerError {
    #[error("refresh interval must be between 1 and {max} seconds, got {0}", max = crate::config::MAX_INTERVAL_SECONDS)]
    InvalidInterval(u64),
}
