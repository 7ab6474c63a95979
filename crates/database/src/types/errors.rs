//! Error types for the database layer

use thiserror::Error;

/// Errors raised while setting up the database
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    #[error("Database migration error: {0}")]
    MigrationError(String),
}

/// Outcome of a failed user repository operation.
///
/// Only a keyed operation that matched zero rows is distinguished; every
/// other failure (duplicate key, lost connection, bad SQL) is carried as
/// `DatabaseError` with the driver's message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("not found")]
    UserNotFound,

    #[error("{0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for UserError {
    fn from(err: sqlx::Error) -> Self {
        UserError::DatabaseError(err.to_string())
    }
}
