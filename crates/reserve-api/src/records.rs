//! Reservation records. Records are immutable once written, and no overlap,
//! capacity or location existence check is made: two users may book the
//! same location for the same slot.

use axum::{Json, extract::State};
use tracing::info;

use reserve_db::Database;
use reserve_types::api::{Reply, ReservationRequest, TokenRequest};
use reserve_types::models::{Record, RecordDetail};

use crate::auth::{AppState, with_db};
use crate::error::{ApiError, Entity};
use crate::payload::Payload;
use crate::session;

pub fn create(db: &Database, user_id: i64, location_id: i64, date: &str, time: &str) -> Result<Record, ApiError> {
    let row = db
        .insert_record(user_id, location_id, date, time)
        .map_err(|e| ApiError::CreateFailed(Entity::Record, e))?;
    Ok(row.into())
}

/// Records of `user_id` in insertion order.
pub fn list_by_user(db: &Database, user_id: i64) -> Result<Vec<Record>, ApiError> {
    let rows = db.get_records_by_user(user_id).map_err(ApiError::QueryFailed)?;
    Ok(rows.into_iter().map(Record::from).collect())
}

/// Like `list_by_user`, joined with each record's location.
pub fn list_detail_by_user(db: &Database, user_id: i64) -> Result<Vec<RecordDetail>, ApiError> {
    let rows = db
        .get_record_details_by_user(user_id)
        .map_err(ApiError::QueryFailed)?;
    Ok(rows.into_iter().map(RecordDetail::from).collect())
}

// -- Handlers --

pub async fn reservation(
    State(state): State<AppState>,
    Payload(req): Payload<ReservationRequest>,
) -> Result<Json<Reply<Record>>, ApiError> {
    let record = with_db(&state, move |db| {
        let user_id = session::resolve(db, &req.token)?;
        create(db, user_id, req.location_id, &req.date, &req.time)
    })
    .await?;

    info!(
        "User {} reserved location {} for {} {}",
        record.user_id, record.location_id, record.date, record.time
    );
    Ok(Json(Reply::with_data("reservation succeeded", record)))
}

pub async fn listrecord(
    State(state): State<AppState>,
    Payload(req): Payload<TokenRequest>,
) -> Result<Json<Reply<Vec<Record>>>, ApiError> {
    let records = with_db(&state, move |db| {
        let user_id = session::resolve(db, &req.token)?;
        list_by_user(db, user_id)
    })
    .await?;

    Ok(Json(Reply::with_data("search succeeded", records)))
}

pub async fn listrecorddetail(
    State(state): State<AppState>,
    Payload(req): Payload<TokenRequest>,
) -> Result<Json<Reply<Vec<RecordDetail>>>, ApiError> {
    let records = with_db(&state, move |db| {
        let user_id = session::resolve(db, &req.token)?;
        list_detail_by_user(db, user_id)
    })
    .await?;

    Ok(Json(Reply::with_data("search succeeded", records)))
}
