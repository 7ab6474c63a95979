//! User service for managing user operations.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;
use userbase_database::{User, UserRepository, UserResult};

/// Storage capability the service depends on.
///
/// Implementations report a keyed operation that matched no row as
/// `UserError::UserNotFound` and every other failure as
/// `UserError::DatabaseError`.
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn create(&self, user: User) -> UserResult<()>;
    async fn get_by_id(&self, id: &str) -> UserResult<User>;
    async fn update(&self, user: User) -> UserResult<()>;
    async fn delete(&self, id: &str) -> UserResult<()>;
}

#[async_trait]
impl UserRepo for UserRepository {
    async fn create(&self, user: User) -> UserResult<()> {
        UserRepository::create(self, &user).await
    }

    async fn get_by_id(&self, id: &str) -> UserResult<User> {
        UserRepository::get_by_id(self, id).await
    }

    async fn update(&self, user: User) -> UserResult<()> {
        UserRepository::update(self, &user).await
    }

    async fn delete(&self, id: &str) -> UserResult<()> {
        UserRepository::delete(self, id).await
    }
}

/// Service for managing user operations
#[derive(Clone)]
pub struct UserService {
    user_repository: Arc<dyn UserRepo>,
}

impl UserService {
    /// Create a new user service over any storage capability
    pub fn new(user_repository: Arc<dyn UserRepo>) -> Self {
        Self { user_repository }
    }

    /// Create a user
    #[instrument(skip(self, user), fields(id = %user.id))]
    pub async fn create(&self, user: User) -> UserResult<()> {
        self.user_repository.create(user).await
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> UserResult<User> {
        self.user_repository.get_by_id(id).await
    }

    /// Update a user's name and email
    #[instrument(skip(self, user), fields(id = %user.id))]
    pub async fn update(&self, user: User) -> UserResult<()> {
        self.user_repository.update(user).await
    }

    /// Delete a user
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> UserResult<()> {
        self.user_repository.delete(id).await
    }
}
