//! Opaque bearer tokens. A token is a random v4 UUID bound to a user id; it
//! never expires and cannot be revoked.

use tracing::error;
use uuid::Uuid;

use reserve_db::Database;

use crate::error::ApiError;

/// Creates and stores a new token for `user_id`.
pub fn issue_token(db: &Database, user_id: i64) -> Result<String, ApiError> {
    let token = Uuid::new_v4().to_string();
    let now = chrono::Utc::now().timestamp();

    db.insert_token(user_id, &token, now)
        .map_err(ApiError::TokenPersist)?;

    Ok(token)
}

/// Maps a token back to its user id. The user row itself is not checked.
pub fn resolve(db: &Database, token: &str) -> Result<i64, ApiError> {
    let row = db
        .get_token(token)
        .map_err(|e| {
            error!("Token lookup failed: {}", e);
            ApiError::AuthFailed
        })?
        .ok_or(ApiError::AuthFailed)?;

    Ok(row.user_id)
}
