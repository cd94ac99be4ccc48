//! Errors raised while loading the dashboard configuration and source lists

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An explicitly requested config file is absent
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    /// TOML or JSON that does not match the expected shape
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// A setting outside its accepted range, e.g. `refresh.interval_seconds`
    #[error("Invalid value for '{field}': {message}")]
    Validation { field: String, message: String },

    /// A wrapped source or integration list lacks its array field
    /// (`services` / `integrations`)
    #[error("List field '{0}' missing from wrapped object")]
    MissingField(String),
}
