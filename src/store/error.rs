//! Error types for the key-value store.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store file {0} is corrupt: {1}")]
    Corrupt(PathBuf, String),

    #[error("failed to serialize document '{key}': {message}")]
    Serialize { key: String, message: String },

    #[error("store lock poisoned")]
    Poisoned,
}
