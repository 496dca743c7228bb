//! SQLite database health adapter

use std::time::Instant;

use application::{
    error::ApplicationError,
    ports::{DatabaseHealth, DatabaseHealthPort},
};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, instrument, warn};

/// Probes the pool with `SELECT 1`
#[derive(Debug, Clone)]
pub struct SqlxDatabaseHealth {
    pool: SqlitePool,
}

impl SqlxDatabaseHealth {
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabaseHealthPort for SqlxDatabaseHealth {
    #[instrument(skip(self))]
    async fn check_health(&self) -> Result<DatabaseHealth, ApplicationError> {
        let start = Instant::now();
        let result = sqlx::query("SELECT 1").execute(&self.pool).await;
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        match result {
            Ok(_) => {
                debug!(response_time_ms = elapsed_ms, "Database health check passed");
                Ok(DatabaseHealth::healthy().with_response_time(elapsed_ms))
            },
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                Ok(DatabaseHealth::unhealthy().with_response_time(elapsed_ms))
            },
        }
    }
}
