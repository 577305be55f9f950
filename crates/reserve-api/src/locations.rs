//! Bookable locations. Any authenticated user may add or edit one; no owner
//! is recorded.

use axum::{Json, extract::State};
use tracing::info;

use reserve_db::Database;
use reserve_types::api::{AddLocationRequest, LocationInfoRequest, Reply, SearchLocationRequest, UpdateLocationRequest};
use reserve_types::models::Location;

use crate::auth::{AppState, with_db};
use crate::error::{ApiError, Entity};
use crate::payload::Payload;
use crate::{session, users};

pub fn add(db: &Database, name: &str, description: &str) -> Result<Location, ApiError> {
    let row = db
        .insert_location(name, description)
        .map_err(|e| ApiError::CreateFailed(Entity::Location, e))?;
    Ok(row.into())
}

/// Overwrites name and description of an existing location.
pub fn update(db: &Database, location_id: i64, name: &str, description: &str) -> Result<(), ApiError> {
    get(db, location_id)?;

    db.update_location(location_id, name, description)
        .map_err(|e| ApiError::UpdateFailed(Entity::Location, e))?;
    Ok(())
}

/// Locations whose name contains `keyword`. An empty keyword matches all.
pub fn search(db: &Database, keyword: &str) -> Result<Vec<Location>, ApiError> {
    let rows = db.search_locations(keyword).map_err(ApiError::QueryFailed)?;
    Ok(rows.into_iter().map(Location::from).collect())
}

pub fn get(db: &Database, location_id: i64) -> Result<Location, ApiError> {
    let row = db
        .get_location(location_id)
        .map_err(ApiError::QueryFailed)?
        .ok_or(ApiError::NotFound(Entity::Location))?;
    Ok(row.into())
}

// -- Handlers --

pub async fn addlocation(
    State(state): State<AppState>,
    Payload(req): Payload<AddLocationRequest>,
) -> Result<Json<Reply<Location>>, ApiError> {
    let location = with_db(&state, move |db| {
        let user_id = session::resolve(db, &req.token)?;
        // The token may outlive its user
        users::get_profile(db, user_id)?;
        add(db, &req.name, &req.description)
    })
    .await?;

    info!("Added location {} ({})", location.name, location.id);
    Ok(Json(Reply::with_data("location added", location)))
}

pub async fn updatelocation(
    State(state): State<AppState>,
    Payload(req): Payload<UpdateLocationRequest>,
) -> Result<Json<Reply<()>>, ApiError> {
    with_db(&state, move |db| {
        session::resolve(db, &req.token)?;
        update(db, req.location_id, &req.name, &req.description)
    })
    .await?;

    Ok(Json(Reply::ok("location updated")))
}

pub async fn searchlocation(
    State(state): State<AppState>,
    Payload(req): Payload<SearchLocationRequest>,
) -> Result<Json<Reply<Vec<Location>>>, ApiError> {
    let locations = with_db(&state, move |db| {
        session::resolve(db, &req.token)?;
        search(db, &req.keyword)
    })
    .await?;

    Ok(Json(Reply::with_data("search succeeded", locations)))
}

pub async fn locationinfo(
    State(state): State<AppState>,
    Payload(req): Payload<LocationInfoRequest>,
) -> Result<Json<Reply<Location>>, ApiError> {
    let location = with_db(&state, move |db| {
        session::resolve(db, &req.token)?;
        get(db, req.location_id)
    })
    .await?;

    Ok(Json(Reply::with_data("query succeeded", location)))
}
