pub mod auth;
pub mod error;
pub mod locations;
pub mod payload;
pub mod records;
pub mod session;
pub mod users;

use std::sync::Arc;

use axum::{Router, routing::post};

use reserve_db::Database;

use crate::auth::{AppState, AppStateInner};

pub fn app_state(db: Database) -> AppState {
    Arc::new(AppStateInner { db })
}

/// All endpoints, each a `POST` with a JSON body.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/userinfo", post(auth::userinfo))
        .route("/updateuserinfo", post(auth::updateuserinfo))
        .route("/addlocation", post(locations::addlocation))
        .route("/updatelocation", post(locations::updatelocation))
        .route("/searchlocation", post(locations::searchlocation))
        .route("/locationinfo", post(locations::locationinfo))
        .route("/reservation", post(records::reservation))
        .route("/listrecord", post(records::listrecord))
        .route("/listrecorddetail", post(records::listrecorddetail))
        .with_state(state)
}
