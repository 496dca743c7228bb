//! HTTP server configuration.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log format: "json" for structured JSON logs, "text" for human-readable
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Graceful shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_secs: Option<u64>,

    /// Maximum request body size in bytes (default: 64KB)
    #[serde(default = "default_max_body_size")]
    pub max_body_size_bytes: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_log_format() -> String {
    "text".to_string()
}

#[allow(clippy::unnecessary_wraps)]
const fn default_shutdown_timeout() -> Option<u64> {
    Some(30)
}

const fn default_max_body_size() -> usize {
    64 * 1024
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_format: default_log_format(),
            shutdown_timeout_secs: default_shutdown_timeout(),
            max_body_size_bytes: default_max_body_size(),
        }
    }
}
