//! Database (SQLite) configuration.

use serde::{Deserialize, Serialize};

/// SQLite database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite:customers.db" or "sqlite::memory:")
    #[serde(default = "default_url")]
    pub url: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of connections to keep open
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Whether to run pending migrations on startup (default: true)
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

fn default_url() -> String {
    "sqlite:customers.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

const fn default_min_connections() -> u32 {
    1
}

const fn default_true() -> bool {
    true
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            run_migrations: true,
        }
    }
}

impl DatabaseConfig {
    /// In-memory database, for tests
    ///
    /// Every SQLite connection to `:memory:` opens its own database, so the
    /// pool is pinned to a single connection.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            run_migrations: true,
        }
    }

    /// File-backed database at `path`
    #[must_use]
    pub fn file(path: impl AsRef<std::path::Path>) -> Self {
        Self {
            url: format!("sqlite:{}", path.as_ref().display()),
            ..Default::default()
        }
    }

    /// Whether this configuration points at an in-memory database
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:")
    }
}
