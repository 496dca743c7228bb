//! Database health check port
//!
//! Lets the readiness probe check storage without knowing the engine.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Database health information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseHealth {
    /// Whether the database is reachable and responding
    pub reachable: bool,
    /// Response time of the probe in milliseconds
    pub response_time_ms: Option<u64>,
}

impl DatabaseHealth {
    /// Create a healthy database status
    #[must_use]
    pub const fn healthy() -> Self {
        Self {
            reachable: true,
            response_time_ms: None,
        }
    }

    /// Create an unhealthy status
    #[must_use]
    pub const fn unhealthy() -> Self {
        Self {
            reachable: false,
            response_time_ms: None,
        }
    }

    /// Add response time to the health status
    #[must_use]
    pub const fn with_response_time(mut self, ms: u64) -> Self {
        self.response_time_ms = Some(ms);
        self
    }
}

/// Port for database health checking operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DatabaseHealthPort: Send + Sync {
    /// Run a lightweight probe query
    async fn check_health(&self) -> Result<DatabaseHealth, ApplicationError>;

    /// Whether the database answered the probe
    async fn is_available(&self) -> bool {
        self.check_health()
            .await
            .is_ok_and(|health| health.reachable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PersistenceError;

    fn _assert_object_safe(_: &dyn DatabaseHealthPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn DatabaseHealthPort>();
    }

    #[test]
    fn database_health_healthy() {
        let health = DatabaseHealth::healthy();
        assert!(health.reachable);
        assert!(health.response_time_ms.is_none());
    }

    #[test]
    fn database_health_unhealthy() {
        assert!(!DatabaseHealth::unhealthy().reachable);
    }

    #[test]
    fn database_health_with_response_time() {
        let health = DatabaseHealth::healthy().with_response_time(42);
        assert_eq!(health.response_time_ms, Some(42));
    }

    struct FailingProbe;

    #[async_trait]
    impl DatabaseHealthPort for FailingProbe {
        async fn check_health(&self) -> Result<DatabaseHealth, ApplicationError> {
            Err(PersistenceError::Storage("connection closed".to_string()).into())
        }
    }

    struct DownProbe;

    #[async_trait]
    impl DatabaseHealthPort for DownProbe {
        async fn check_health(&self) -> Result<DatabaseHealth, ApplicationError> {
            Ok(DatabaseHealth::unhealthy())
        }
    }

    #[tokio::test]
    async fn probe_error_means_unavailable() {
        assert!(!FailingProbe.is_available().await);
    }

    #[tokio::test]
    async fn unreachable_report_means_unavailable() {
        assert!(!DownProbe.is_available().await);
    }

    #[tokio::test]
    async fn mocked_probe_reports_response_time() {
        let mut probe = MockDatabaseHealthPort::new();
        probe
            .expect_check_health()
            .times(1)
            .returning(|| Ok(DatabaseHealth::healthy().with_response_time(1)));

        let health = probe.check_health().await.unwrap();
        assert_eq!(health, DatabaseHealth::healthy().with_response_time(1));
    }
}
