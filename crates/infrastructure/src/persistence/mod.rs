//! Persistence adapters
//!
//! SQLite through an async sqlx pool. The schema lives in the workspace
//! `migrations/` directory.

mod async_connection;
mod customer_record;
mod customer_repository;
mod database_health;
mod error;

pub mod customer_mapper;

pub use async_connection::{AsyncDatabase, AsyncDatabaseError};
pub use customer_record::CustomerRecord;
pub use customer_repository::SqlxCustomerRepository;
pub use database_health::SqlxDatabaseHealth;
pub use error::map_sqlx_error;
