//! # Userbase Gateway Crate
//!
//! HTTP adapter for Userbase. It decodes requests, calls the user service and
//! maps each outcome onto a status code and a JSON body.
//!
//! ## Architecture
//!
//! - **REST**: the four user routes plus `/health`
//! - **State**: the shared [`GatewayState`] holding the user service
//! - **Error**: [`GatewayError`], the single place storage outcomes become statuses
//! - **Middleware**: request tracing
//!
//! ## Usage
//!
//! ```rust,ignore
//! use userbase_gateway::{create_router, GatewayState};
//!
//! let app = create_router(GatewayState::from_pool(pool));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod error;
pub mod middleware;
pub mod rest;
pub mod state;

pub use error::{GatewayError, GatewayResult};
pub use state::GatewayState;

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        rest::health::health_check,
        rest::users::create_user,
        rest::users::get_user,
        rest::users::update_user,
        rest::users::delete_user,
    ),
    components(
        schemas(
            rest::health::HealthResponse,
            rest::users::UserResponse,
            rest::users::CreateUserRequest,
            rest::users::UpdateUserRequest,
            rest::users::ErrorResponse,
        )
    ),
    tags(
        (name = "users", description = "User management"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

/// Create the main application router with all routes
pub fn create_router(state: GatewayState) -> Router {
    Router::new()
        .merge(rest::create_rest_routes().with_state(state))
        .route("/api-docs/openapi.json", get(openapi_document))
        .layer(middleware::create_trace_middleware())
}

async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
