//! HTTP surface.

pub mod error;
pub mod routes;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::db::Store;

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::welcome))
        .route("/api/v1.0/precipitation", get(routes::precipitation))
        .route("/api/v1.0/stations", get(routes::stations))
        .route("/api/v1.0/tobs", get(routes::tobs))
        .route("/api/v1.0/temp/{start}", get(routes::stats_from))
        .route("/api/v1.0/temp/{start}/{end}", get(routes::stats_between))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
