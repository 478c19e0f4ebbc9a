//! One handler per route. Each runs a single store query and shapes the result as JSON.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error::ApiError, AppState};
use crate::constants::{one_year_before_anchor, PRIMARY_STATION, WELCOME};

type ApiResult<T> = Result<Json<T>, ApiError>;

pub async fn welcome() -> &'static str {
    WELCOME
}

/// Precipitation by date for the year before the anchor date. Later rows win on a repeated date.
pub async fn precipitation(
    State(state): State<AppState>,
) -> ApiResult<BTreeMap<String, Option<f64>>> {
    let pairs = state
        .store
        .recent_precipitation(one_year_before_anchor())
        .await?;

    Ok(Json(pairs.into_iter().collect()))
}

pub async fn stations(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    Ok(Json(state.store.station_ids().await?))
}

pub async fn tobs(State(state): State<AppState>) -> ApiResult<Vec<Option<f64>>> {
    let temps = state
        .store
        .station_observations(PRIMARY_STATION, one_year_before_anchor())
        .await?;

    Ok(Json(temps))
}

pub async fn stats_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> ApiResult<[Option<f64>; 3]> {
    let stats = state.store.temp_stats(&start, None).await?;

    Ok(Json(stats.to_array()))
}

pub async fn stats_between(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> ApiResult<[Option<f64>; 3]> {
    let stats = state.store.temp_stats(&start, Some(&end)).await?;

    Ok(Json(stats.to_array()))
}

// -- Tests -------------------------------------------------------------------
