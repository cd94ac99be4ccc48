//! Error types for status fetching.

use thiserror::Error;

/// Reasons a status fetch did not produce a body to normalize.
///
/// These never leave the fetcher: every variant collapses into an
/// `unknown` status. They exist so the cause can be logged.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Request exceeded the fetch bound
    #[error("request timeout after {0}ms")]
    Timeout(u128),

    /// Connection failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Non-2xx response
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// Body could not be read
    #[error("failed to read body: {0}")]
    Body(String),
}
