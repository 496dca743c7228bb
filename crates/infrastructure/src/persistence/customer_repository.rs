//! SQLite-backed customer repository

use application::{error::ApplicationError, ports::CustomerRepository};
use async_trait::async_trait;
use domain::{Customer, masking::mask_cpf};
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use super::{CustomerRecord, customer_mapper, error::map_sqlx_error};

/// Customer repository over the `customers` table
///
/// Uniqueness of cpf, email and phone is enforced by the schema; `exists`
/// only lets callers detect the common case early.
#[derive(Debug, Clone)]
pub struct SqlxCustomerRepository {
    pool: SqlitePool,
}

impl SqlxCustomerRepository {
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for SqlxCustomerRepository {
    #[instrument(skip(self, cpf), fields(cpf = %mask_cpf(cpf)))]
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Customer>, ApplicationError> {
        let record: Option<CustomerRecord> = sqlx::query_as(
            "SELECT id, cpf, name, email, phone FROM customers WHERE cpf = $1",
        )
        .bind(cpf)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(found = record.is_some(), "Customer lookup");

        Ok(record.map(customer_mapper::to_domain).transpose()?)
    }

    #[instrument(skip_all, fields(cpf = %mask_cpf(cpf)))]
    async fn exists(&self, cpf: &str, email: &str, phone: &str) -> Result<bool, ApplicationError> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM customers WHERE cpf = $1 OR email = $2 OR phone = $3)",
        )
        .bind(cpf)
        .bind(email)
        .bind(phone)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    #[instrument(skip_all, fields(customer_id = %customer.id()))]
    async fn save(&self, customer: &Customer) -> Result<Customer, ApplicationError> {
        let record = customer_mapper::to_record(customer);

        let saved: CustomerRecord = sqlx::query_as(
            "INSERT INTO customers (id, cpf, name, email, phone) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, cpf, name, email, phone",
        )
        .bind(&record.id)
        .bind(&record.cpf)
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(record = ?saved, "Customer row inserted");

        Ok(customer_mapper::to_domain(saved)?)
    }
}
