//! Public snapshot export.
//!
//! A snapshot is a point-in-time copy of the enabled sources and the full
//! history, encoded as base64 JSON so it can travel in a URL fragment.
//!
//! Nothing is redacted: every enabled source (including internal URLs and
//! environment tags) and every history message ends up in the payload, and
//! base64 is an encoding, not protection.

use crate::config::StatusSourceConfig;
use crate::events::{EventLog, HistoryEntry};
use crate::registry::SourceRegistry;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fragment key preceding the encoded payload.
pub const FRAGMENT_PREFIX: &str = "#public=";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("snapshot payload is malformed: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Immutable export of enabled sources and history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicSnapshot {
    pub created: DateTime<Utc>,
    pub widgets: Vec<StatusSourceConfig>,
    pub history: Vec<HistoryEntry>,
}

impl PublicSnapshot {
    /// Capture the current enabled sources and full history.
    pub fn build(registry: &SourceRegistry, log: &EventLog) -> Self {
        Self {
            created: Utc::now(),
            widgets: registry.get_enabled_sources(),
            history: log.history(),
        }
    }

    /// Base64 (standard alphabet) of the JSON encoding.
    pub fn encode(&self) -> Result<String, SnapshotError> {
        let json = serde_json::to_vec(self)?;
        Ok(STANDARD.encode(json))
    }

    /// The encoded snapshot as a URL fragment, `#public=<payload>`.
    pub fn url_fragment(&self) -> Result<String, SnapshotError> {
        Ok(format!("{}{}", FRAGMENT_PREFIX, self.encode()?))
    }

    /// Decode a payload, with or without the fragment prefix.
    pub fn decode(encoded: &str) -> Result<Self, SnapshotError> {
        let trimmed = encoded.trim();
        let payload = trimmed
            .strip_prefix(FRAGMENT_PREFIX)
            .or_else(|| trimmed.strip_prefix("public="))
            .unwrap_or(trimmed);
        let json = STANDARD.decode(payload)?;
        Ok(serde_json::from_slice(&json)?)
    }
}
