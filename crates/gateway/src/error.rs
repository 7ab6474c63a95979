//! Error types for the gateway layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use userbase_users::UserError;

/// Gateway error types
///
/// Every variant renders as `{"error": <message>}`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The request body was not valid JSON for the expected shape.
    #[error("invalid body")]
    InvalidBody,

    #[error("not found")]
    NotFound,

    /// Any other failure; the message is passed to the client verbatim.
    #[error("{0}")]
    InternalError(String),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidBody => StatusCode::BAD_REQUEST,
            GatewayError::NotFound => StatusCode::NOT_FOUND,
            GatewayError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Collapse a service error into a 500, not-found included.
    pub fn internal(error: UserError) -> Self {
        GatewayError::InternalError(error.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Not-found is the only storage outcome with its own status.
impl From<UserError> for GatewayError {
    fn from(error: UserError) -> Self {
        match error {
            UserError::UserNotFound => GatewayError::NotFound,
            other => GatewayError::internal(other),
        }
    }
}
