//! Shared error mapping for sqlx persistence layer

use application::error::{ApplicationError, PersistenceError};

/// Map a sqlx error to an application-layer error
///
/// Uniqueness violations keep their own variant so the registration flow can
/// report them as conflicts.
pub fn map_sqlx_error(e: sqlx::Error) -> ApplicationError {
    match e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            PersistenceError::UniqueViolation(db_err.message().to_string()).into()
        },
        sqlx::Error::Database(db_err) => {
            PersistenceError::Storage(format!("Database error: {db_err}")).into()
        },
        other => PersistenceError::Storage(format!("Database error: {other}")).into(),
    }
}
