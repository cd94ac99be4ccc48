//! HTTP server configuration

use serde::{Deserialize, Serialize};

/// Dashboard API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on a single API request, including a manual refresh-all
    pub request_timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_seconds: 120,
        }
    }
}
