//! Application configuration
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml` in the working directory, then `CUSTOMERS__*` environment
//! variables (`CUSTOMERS__SERVER__PORT=9000`, `CUSTOMERS__DATABASE__URL=...`).

mod database;
mod server;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "CUSTOMERS";

/// Separator between the prefix and nested keys in environment variables
pub const ENV_SEPARATOR: &str = "__";

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - internal error details are exposed
    #[default]
    #[serde(alias = "dev")]
    Development,
    /// Production environment - internal error details are hidden
    #[serde(alias = "prod")]
    Production,
}

impl Environment {
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from the optional `config.toml` and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(environment_source())
            .build()?
            .try_deserialize()
    }

    /// Parse configuration from TOML text, defaults filling the gaps
    pub fn from_toml(contents: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Whether HTTP 5xx responses may carry internal error details
    #[must_use]
    pub const fn expose_internal_errors(&self) -> bool {
        !self.environment.is_production()
    }
}

fn environment_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}
