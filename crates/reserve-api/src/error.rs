use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use reserve_types::api::Reply;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Location,
    Record,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Entity::User => "user",
            Entity::Location => "location",
            Entity::Record => "record",
        })
    }
}

/// Failure of a single request. The `Display` text may carry storage detail
/// and is only logged; callers see `message()`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request body could not be parsed")]
    Parameter,
    #[error("unknown token")]
    AuthFailed,
    #[error("{0} not found")]
    NotFound(Entity),
    #[error("username already exists")]
    DuplicateUsername,
    #[error("password mismatch")]
    InvalidCredential,
    #[error("failed to create {0}: {1}")]
    CreateFailed(Entity, anyhow::Error),
    #[error("failed to update {0}: {1}")]
    UpdateFailed(Entity, anyhow::Error),
    #[error("failed to persist token: {0}")]
    TokenPersist(anyhow::Error),
    #[error("query failed: {0}")]
    QueryFailed(anyhow::Error),
    #[error("internal error: {0}")]
    Internal(anyhow::Error),
}

impl ApiError {
    /// Value of the `code` field in the reply envelope.
    pub fn code(&self) -> i32 {
        match self {
            ApiError::UpdateFailed(Entity::User, _) => 2,
            _ => 1,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UpdateFailed(Entity::User, _) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Text sent to the client. Never includes storage driver output.
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::Parameter => "parameter error",
            ApiError::AuthFailed => "authentication failed",
            ApiError::NotFound(Entity::User) => "failed to fetch user info",
            ApiError::NotFound(_) => "location not found",
            ApiError::DuplicateUsername => "username already exists",
            ApiError::InvalidCredential => "invalid username or password",
            ApiError::CreateFailed(Entity::User, _) => "registration failed",
            ApiError::CreateFailed(Entity::Location, _) => "failed to add location",
            ApiError::CreateFailed(Entity::Record, _) => "reservation failed",
            ApiError::UpdateFailed(Entity::User, _) => "failed to update user info",
            ApiError::UpdateFailed(_, _) => "failed to update location",
            ApiError::TokenPersist(_) => "failed to generate token",
            ApiError::QueryFailed(_) => "query failed",
            ApiError::Internal(_) => "internal error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::CreateFailed(..)
            | ApiError::UpdateFailed(..)
            | ApiError::TokenPersist(_)
            | ApiError::QueryFailed(_)
            | ApiError::Internal(_) => error!("{}", self),
            ApiError::AuthFailed => warn!("rejected request: {}", self),
            _ => {}
        }

        (self.status(), Json(Reply::new(self.code(), self.message()))).into_response()
    }
}
