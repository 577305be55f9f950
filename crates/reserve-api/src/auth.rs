use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::{error, info};

use reserve_db::Database;
use reserve_db::models::ProfileUpdate;
use reserve_types::api::{CredentialsRequest, Reply, TokenRequest, UpdateUserInfoRequest};
use reserve_types::models::User;

use crate::error::{ApiError, Entity};
use crate::payload::Payload;
use crate::{session, users};

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
}

/// Runs store work off the async runtime.
pub(crate) async fn with_db<F, T>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&Database) -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(&state.db))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal(e.into())
        })?
}

pub async fn register(
    State(state): State<AppState>,
    Payload(req): Payload<CredentialsRequest>,
) -> Result<Json<Reply<()>>, ApiError> {
    let username = req.user_name.clone();
    let user_id = with_db(&state, move |db| users::register(db, &req.user_name, &req.password)).await?;

    info!("Registered user {} ({})", username, user_id);
    Ok(Json(Reply::ok("registration succeeded")))
}

pub async fn login(
    State(state): State<AppState>,
    Payload(req): Payload<CredentialsRequest>,
) -> Result<Json<Reply<()>>, ApiError> {
    let (user_id, token) = with_db(&state, move |db| {
        // Unknown user and wrong password get the same answer
        let user_id = users::authenticate(db, &req.user_name, &req.password).map_err(|e| match e {
            ApiError::NotFound(Entity::User) => ApiError::InvalidCredential,
            e => e,
        })?;
        let token = session::issue_token(db, user_id)?;
        Ok((user_id, token))
    })
    .await?;

    info!("User {} logged in", user_id);
    Ok(Json(Reply::ok("login succeeded").with_token(token)))
}

pub async fn userinfo(
    State(state): State<AppState>,
    Payload(req): Payload<TokenRequest>,
) -> Result<Json<Reply<User>>, ApiError> {
    let user = with_db(&state, move |db| {
        let user_id = session::resolve(db, &req.token)?;
        users::get_profile(db, user_id)
    })
    .await?;

    Ok(Json(Reply::with_data("fetched user info", user)))
}

pub async fn updateuserinfo(
    State(state): State<AppState>,
    Payload(req): Payload<UpdateUserInfoRequest>,
) -> Result<Json<Reply<()>>, ApiError> {
    with_db(&state, move |db| {
        let user_id = session::resolve(db, &req.token)?;
        users::update_profile(
            db,
            user_id,
            &ProfileUpdate {
                username: &req.user_name,
                password: &req.password,
                avatar: &req.avatar,
                nick_name: &req.nick_name,
                phone_number: &req.phone_number,
            },
        )
    })
    .await?;

    Ok(Json(Reply::ok("user info updated")))
}
