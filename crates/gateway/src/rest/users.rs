//! User REST endpoints
//!
//! Each handler decodes the request, makes exactly one service call and maps
//! the outcome. Only the not-found storage condition gets its own status;
//! Create does not distinguish it at all.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use userbase_users::User;
use utoipa::ToSchema;

use super::body::JsonBody;
use crate::error::{GatewayError, GatewayResult};
use crate::state::GatewayState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<CreateUserRequest> for User {
    fn from(request: CreateUserRequest) -> Self {
        User::new(request.id, request.name, request.email)
    }
}

/// Replacement name and email. Unknown fields, an `id` included, are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
}

impl UpdateUserRequest {
    /// Build the user to store, keyed by the path id.
    pub fn into_user(self, id: String) -> User {
        User::new(id, self.name, self.email)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Create user routes
pub fn create_user_routes() -> Router<GatewayState> {
    Router::new()
        .route("/users", post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<GatewayState>,
    JsonBody(request): JsonBody<CreateUserRequest>,
) -> GatewayResult<StatusCode> {
    state
        .user_service()
        .create(request.into())
        .await
        .map_err(GatewayError::internal)?;

    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "No user with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
) -> GatewayResult<Json<UserResponse>> {
    let user = state.user_service().get(&id).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated"),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 404, description = "No user with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateUserRequest>,
) -> GatewayResult<StatusCode> {
    state.user_service().update(request.into_user(id)).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "No user with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
) -> GatewayResult<StatusCode> {
    state.user_service().delete(&id).await?;
    Ok(StatusCode::OK)
}
