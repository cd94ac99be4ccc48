//! Status fetching and normalization.
//!
//! This module turns a status source URL into a canonical [`StatusResult`]:
//! one bounded HTTP request, content-kind classification, one of three
//! normalizers, and the vendor [`map_severity`] scale.

mod error;
mod fetcher;
mod normalize;
mod severity;

#[cfg(test)]
mod tests;

pub use error::*;
pub use fetcher::*;
pub use normalize::*;
pub use severity::*;

use serde::{Deserialize, Serialize};

pub const MSG_UNREACHABLE: &str = "Unreachable / offline";

/// Outcome of one status fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResult {
    pub level: Severity,
    pub message: String,
}

impl StatusResult {
    pub fn new(level: Severity, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Result reported for every transport failure.
    pub fn unreachable() -> Self {
        Self::new(Severity::Unknown, MSG_UNREACHABLE)
    }
}
