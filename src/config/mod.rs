//! Configuration module for statuswatch
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`STATUSWATCH_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use statuswatch::config::StatusWatchConfig;
//!
//! let toml = r#"
//! [refresh]
//! interval_seconds = 30
//!
//! [[sources]]
//! id = "payments"
//! name = "Payments API"
//! api = "https://status.payments.example/api/status.json"
//! "#;
//! let config: StatusWatchConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.refresh.interval_seconds, 30);
//! assert_eq!(config.sources[0].env, "prod");
//! ```

pub mod alerts;
pub mod error;
pub mod logging;
pub mod refresh;
pub mod server;
pub mod source;
pub mod store;

pub use alerts::AlertConfig;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use refresh::{RefreshConfig, MAX_INTERVAL_SECONDS};
pub use server::ServerConfig;
pub use source::{
    load_integrations, load_sources, parse_list, IntegrationConfig, StatusSourceConfig,
};
pub use store::StoreConfig;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Unified configuration for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StatusWatchConfig {
    /// HTTP API server
    pub server: ServerConfig,
    /// Periodic refresh timer
    pub refresh: RefreshConfig,
    /// Key-value store backing settings and the database document
    pub store: StoreConfig,
    /// Alert defaults
    pub alerts: AlertConfig,
    /// Logging
    pub logging: LoggingConfig,
    /// Optional JSON file with additional status sources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources_file: Option<PathBuf>,
    /// Optional JSON file with integrations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrations_file: Option<PathBuf>,
    /// Inline status sources
    pub sources: Vec<StatusSourceConfig>,
}

impl StatusWatchConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Load the file when it exists, fall back to defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(Some(path))
        } else {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    ///
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(port) = std::env::var("STATUSWATCH_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(host) = std::env::var("STATUSWATCH_HOST") {
            self.server.host = host;
        }
        if let Ok(level) = std::env::var("STATUSWATCH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("STATUSWATCH_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }
        if let Ok(interval) = std::env::var("STATUSWATCH_REFRESH_INTERVAL") {
            if let Ok(i) = interval.parse() {
                self.refresh.interval_seconds = i;
            }
        }
        if let Ok(path) = std::env::var("STATUSWATCH_STORE_PATH") {
            self.store.path = PathBuf::from(path);
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation {
                field: "server.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }

        if !(1..=MAX_INTERVAL_SECONDS).contains(&self.refresh.interval_seconds) {
            return Err(ConfigError::Validation {
                field: "refresh.interval_seconds".to_string(),
                message: format!(
                    "interval must be between 1 and {} seconds",
                    MAX_INTERVAL_SECONDS
                ),
            });
        }

        let mut seen = HashSet::new();
        for (i, source) in self.sources.iter().enumerate() {
            for (name, value) in [("id", &source.id), ("name", &source.name), ("api", &source.api)] {
                if value.is_empty() {
                    return Err(ConfigError::Validation {
                        field: format!("sources[{}].{}", i, name),
                        message: format!("{} cannot be empty", name),
                    });
                }
            }
            if !seen.insert(source.id.as_str()) {
                return Err(ConfigError::Validation {
                    field: format!("sources[{}].id", i),
                    message: format!("duplicate source id '{}'", source.id),
                });
            }
        }

        Ok(())
    }

    /// Inline sources followed by those from `sources_file`.
    ///
    /// A file entry whose id is already taken is skipped with a warning.
    pub fn resolve_sources(&self) -> Vec<StatusSourceConfig> {
        let mut sources = self.sources.clone();
        if let Some(path) = &self.sources_file {
            for source in load_sources(path) {
                if sources.iter().any(|s| s.id == source.id) {
                    tracing::warn!(source_id = %source.id, "Duplicate source id in sources file, skipping");
                    continue;
                }
                sources.push(source);
            }
        }
        sources
    }

    /// Integrations from `integrations_file`, empty when unset or unreadable.
    pub fn resolve_integrations(&self) -> Vec<IntegrationConfig> {
        self.integrations_file
            .as_deref()
            .map(load_integrations)
            .unwrap_or_default()
    }
}
