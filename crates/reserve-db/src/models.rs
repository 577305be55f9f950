//! Database row types. These map directly to SQLite rows and stay separate
//! from the reserve-types wire models.
use reserve_types::models::{Location, Record, RecordDetail, User};

pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub avatar: String,
    pub nick_name: String,
    pub phone_number: String,
}

/// Full set of mutable profile columns. Every field is written on update.
pub struct ProfileUpdate<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub avatar: &'a str,
    pub nick_name: &'a str,
    pub phone_number: &'a str,
}

pub struct TokenRow {
    pub id: i64,
    pub user_id: i64,
    pub token: String,
    pub created_at: i64,
}

pub struct LocationRow {
    pub id: i64,
    pub name: String,
    pub description: String,
}

pub struct RecordRow {
    pub id: i64,
    pub user_id: i64,
    pub location_id: i64,
    pub date: String,
    pub time: String,
}

/// A record left-joined with `locations`; the location columns are `None`
/// when no location row matches.
pub struct RecordDetailRow {
    pub record: RecordRow,
    pub location_name: Option<String>,
    pub location_description: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            password: row.password,
            avatar: row.avatar,
            nick_name: row.nick_name,
            phone_number: row.phone_number,
        }
    }
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location {
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}

impl From<RecordRow> for Record {
    fn from(row: RecordRow) -> Self {
        Record {
            id: row.id,
            user_id: row.user_id,
            location_id: row.location_id,
            date: row.date,
            time: row.time,
        }
    }
}

impl From<RecordDetailRow> for RecordDetail {
    fn from(row: RecordDetailRow) -> Self {
        RecordDetail {
            id: row.record.id,
            user_id: row.record.user_id,
            location_id: row.record.location_id,
            date: row.record.date,
            time: row.record.time,
            location_name: row.location_name.unwrap_or_default(),
            location_description: row.location_description.unwrap_or_default(),
        }
    }
}
