//! User repository for database operations.

use crate::entities::User;
use crate::types::{UserError, UserResult};
use sqlx::AnyPool;
use tracing::debug;

/// Repository for user database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: AnyPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Insert a new user row.
    ///
    /// A duplicate id is reported like any other storage failure.
    pub async fn create(&self, user: &User) -> UserResult<()> {
        sqlx::query("INSERT INTO users (id, name, email) VALUES ($1, $2, $3)")
            .bind(&user.id)
            .bind(&user.name)
            .bind(&user.email)
            .execute(&self.pool)
            .await?;

        debug!(id = %user.id, "created user");
        Ok(())
    }

    /// Find user by ID
    pub async fn get_by_id(&self, id: &str) -> UserResult<User> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(UserError::UserNotFound)
    }

    /// Overwrite name and email of the row matching `user.id`.
    pub async fn update(&self, user: &User) -> UserResult<()> {
        let result = sqlx::query("UPDATE users SET name = $1, email = $2 WHERE id = $3")
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.id)
            .execute(&self.pool)
            .await?;

        // The statement succeeds on a missing row; zero affected rows means not found.
        if result.rows_affected() == 0 {
            return Err(UserError::UserNotFound);
        }

        debug!(id = %user.id, "updated user");
        Ok(())
    }

    /// Delete user (permanent)
    pub async fn delete(&self, id: &str) -> UserResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(UserError::UserNotFound);
        }

        debug!(id, "deleted user");
        Ok(())
    }
}
