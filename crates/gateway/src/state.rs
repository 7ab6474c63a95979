//! Shared application state for the gateway

use std::sync::Arc;

use userbase_database::AnyPool;
use userbase_users::{UserRepo, UserRepository, UserService};

/// Shared application state containing the user service
#[derive(Clone)]
pub struct GatewayState {
    /// User service
    pub user_service: UserService,
}

impl GatewayState {
    /// Create a gateway state around an existing service
    pub fn new(user_service: UserService) -> Self {
        Self { user_service }
    }

    /// Build the service stack over any storage capability
    pub fn with_repository(repository: Arc<dyn UserRepo>) -> Self {
        Self::new(UserService::new(repository))
    }

    /// Wire the sqlx-backed repository onto a connection pool
    pub fn from_pool(pool: AnyPool) -> Self {
        Self::with_repository(Arc::new(UserRepository::new(pool)))
    }

    /// Get a user service reference
    pub fn user_service(&self) -> &UserService {
        &self.user_service
    }
}
