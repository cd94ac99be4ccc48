//! Status source and integration definitions, and the list loader.

use super::error::ConfigError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A monitored status endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSourceConfig {
    /// Stable identifier, unique across the catalog
    pub id: String,
    /// Display label
    pub name: String,
    /// URL polled for status
    pub api: String,
    /// Human-facing status page
    #[serde(default)]
    pub page: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Environment tag, e.g. "prod"
    #[serde(default = "default_env")]
    pub env: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Third-party integration entry. Only identity and the enabled flag are
/// interpreted; everything else is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationConfig {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(flatten)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

fn default_enabled() -> bool {
    true
}

fn default_env() -> String {
    "prod".to_string()
}

/// Field holding the list when a sources file is a wrapped object.
pub const SOURCES_FIELD: &str = "services";
/// Field holding the list when an integrations file is a wrapped object.
pub const INTEGRATIONS_FIELD: &str = "integrations";

/// Parse a JSON list that is either a bare array or an object wrapping the
/// array under `field`.
pub fn parse_list<T: DeserializeOwned>(content: &str, field: &str) -> Result<Vec<T>, ConfigError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    let list = match value {
        serde_json::Value::Array(_) => value,
        serde_json::Value::Object(mut map) => map
            .remove(field)
            .ok_or_else(|| ConfigError::MissingField(field.to_string()))?,
        _ => {
            return Err(ConfigError::Parse(format!(
                "expected an array or an object with '{}'",
                field
            )))
        }
    };

    serde_json::from_value(list).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Read a list file, see [`parse_list`].
pub fn load_list<T: DeserializeOwned>(path: &Path, field: &str) -> Result<Vec<T>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_list(&content, field)
}

/// Load status sources, degrading to an empty list on any failure.
pub fn load_sources(path: &Path) -> Vec<StatusSourceConfig> {
    load_list(path, SOURCES_FIELD).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Failed to load status sources, continuing with none");
        Vec::new()
    })
}

/// Load integrations, degrading to an empty list on any failure.
pub fn load_integrations(path: &Path) -> Vec<IntegrationConfig> {
    load_list(path, INTEGRATIONS_FIELD).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Failed to load integrations, continuing with none");
        Vec::new()
    })
}
