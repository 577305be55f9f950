//! Account storage and password checks.
//!
//! Passwords are stored and compared exactly as supplied. Hashing would
//! change the stored format and is left to the service owner.

use reserve_db::models::ProfileUpdate;
use reserve_db::{Database, is_unique_violation};
use reserve_types::models::User;

use crate::error::{ApiError, Entity};

pub fn register(db: &Database, username: &str, password: &str) -> Result<i64, ApiError> {
    let existing = db
        .get_user_by_username(username)
        .map_err(|e| ApiError::CreateFailed(Entity::User, e))?;
    if existing.is_some() {
        return Err(ApiError::DuplicateUsername);
    }

    // A concurrent register can still win the race; the UNIQUE index decides.
    db.create_user(username, password).map_err(|e| {
        if is_unique_violation(&e) {
            ApiError::DuplicateUsername
        } else {
            ApiError::CreateFailed(Entity::User, e)
        }
    })
}

pub fn authenticate(db: &Database, username: &str, password: &str) -> Result<i64, ApiError> {
    let user = db
        .get_user_by_username(username)
        .map_err(ApiError::QueryFailed)?
        .ok_or(ApiError::NotFound(Entity::User))?;

    if user.password != password {
        return Err(ApiError::InvalidCredential);
    }

    Ok(user.id)
}

/// Profile with the password blanked.
pub fn get_profile(db: &Database, user_id: i64) -> Result<User, ApiError> {
    let row = db
        .get_user_by_id(user_id)
        .map_err(ApiError::QueryFailed)?
        .ok_or(ApiError::NotFound(Entity::User))?;

    Ok(User::from(row).redacted())
}

/// Overwrites every profile field, empty values included.
pub fn update_profile(db: &Database, user_id: i64, profile: &ProfileUpdate<'_>) -> Result<(), ApiError> {
    db.update_user(user_id, profile)
        .map_err(|e| ApiError::UpdateFailed(Entity::User, e))?;
    Ok(())
}
