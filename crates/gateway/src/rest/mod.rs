//! REST API endpoints for the gateway

pub mod body;
pub mod health;
pub mod users;

use axum::{routing::get, Router};

use crate::state::GatewayState;

/// Create all REST routes
pub fn create_rest_routes() -> Router<GatewayState> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(users::create_user_routes())
}
