//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of SQLite, and provides
//! configuration loading and logging setup for the binaries.

pub mod config;
pub mod persistence;
pub mod telemetry;

pub use config::{AppConfig, DatabaseConfig, Environment, ServerConfig};
pub use persistence::{
    AsyncDatabase, AsyncDatabaseError, CustomerRecord, SqlxCustomerRepository, SqlxDatabaseHealth,
};
pub use telemetry::{LogFormat, init_logging};
