//! Application state shared across handlers

use std::{fmt, sync::Arc};

use application::{CustomerService, DatabaseHealthPort};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Registration and lookup use cases
    pub customer_service: Arc<CustomerService>,
    /// Storage probe for the readiness endpoint; `None` skips the check
    pub database_health: Option<Arc<dyn DatabaseHealthPort>>,
}

impl AppState {
    pub fn new(customer_service: Arc<CustomerService>) -> Self {
        Self {
            customer_service,
            database_health: None,
        }
    }

    #[must_use]
    pub fn with_database_health(mut self, health: Arc<dyn DatabaseHealthPort>) -> Self {
        self.database_health = Some(health);
        self
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("customer_service", &self.customer_service)
            .field("database_health", &self.database_health.is_some())
            .finish()
    }
}
