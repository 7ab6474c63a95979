//! Userbase Database Crate
//!
//! This crate provides database functionality for the Userbase service,
//! including connection management, migrations, and the user repository.

use userbase_config::DatabaseConfig;

pub mod connection;
pub mod entities;
pub mod migrations;
pub mod repos;
pub mod types;

pub use connection::{prepare_database, DatabaseConnection};
pub use migrations::run_migrations;

pub use entities::User;
pub use repos::UserRepository;

pub use types::{
    errors::{DatabaseError, UserError},
    DatabaseResult, UserResult,
};

/// Re-export commonly used types for convenience
pub use sqlx::AnyPool;

/// Initialize the database with migrations
pub async fn initialize_database(config: &DatabaseConfig) -> DatabaseResult<AnyPool> {
    let pool = prepare_database(config)
        .await
        .map_err(|e| DatabaseError::ConnectionError(format!("{e:#}")))?;

    run_migrations(&pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(format!("{e:#}")))?;

    Ok(pool)
}
