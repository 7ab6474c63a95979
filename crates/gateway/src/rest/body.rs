//! JSON request body extraction

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::GatewayError;

/// JSON body extractor that ignores `Content-Type`.
///
/// Any read or decode failure is rejected with [`GatewayError::InvalidBody`],
/// so a handler taking `JsonBody<T>` never runs on a malformed payload.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|error| {
            debug!(%error, "failed to read request body");
            GatewayError::InvalidBody
        })?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|error| {
            debug!(%error, "rejected request body");
            GatewayError::InvalidBody
        })
    }
}
