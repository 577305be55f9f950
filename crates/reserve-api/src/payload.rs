use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;

/// JSON body extractor. Unlike `axum::Json` it ignores `Content-Type`, and
/// every failure (unreadable body, bad syntax, wrong type) collapses
/// to `ApiError::Parameter`.
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            debug!("Unreadable request body: {}", e);
            ApiError::Parameter
        })?;

        serde_json::from_slice(&bytes).map(Payload).map_err(|e| {
            debug!("Invalid request body: {}", e);
            ApiError::Parameter
        })
    }
}
