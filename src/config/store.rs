//! Persistence configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON file backing the key-value store
    pub path: PathBuf,
    /// Keep everything in memory and never touch disk
    pub in_memory: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("statuswatch-data.json"),
            in_memory: false,
        }
    }
}
