//! Fixed reference values for the recency-filtered routes.

use chrono::{Duration, NaiveDate};

/// Most recent observation date in the dataset. Recency routes look back from here
/// rather than from the wall clock.
pub const ANCHOR_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2017, 8, 23) {
    Some(date) => date,
    None => panic!("invalid anchor date"),
};

pub const LOOKBACK_DAYS: i64 = 365;

/// Station with the most observations, used by the tobs route.
pub const PRIMARY_STATION: &str = "USC00519281";

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const WELCOME: &str = "
    Welcome to the Climate Analysis API!
    Available Routes:
    /api/v1.0/precipitation
    /api/v1.0/stations
    /api/v1.0/tobs
    /api/v1.0/temp/start/end
    ";

pub fn one_year_before_anchor() -> NaiveDate {
    ANCHOR_DATE - Duration::days(LOOKBACK_DAYS)
}

// -- Tests -------------------------------------------------------------------
