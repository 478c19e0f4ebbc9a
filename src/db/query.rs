//! Read queries. Each operation is a single parameterised statement against the shared connection.

use chrono::NaiveDate;

use super::Store;
use crate::{constants::DATE_FORMAT, record::TempStats};

const TEMP_STATS_FROM: &str = "SELECT CAST(MIN(tobs) AS REAL) AS min, AVG(tobs) AS avg, CAST(MAX(tobs) AS REAL) AS max
    FROM measurement
    WHERE date >= ?1";

const TEMP_STATS_BETWEEN: &str = "SELECT CAST(MIN(tobs) AS REAL) AS min, AVG(tobs) AS avg, CAST(MAX(tobs) AS REAL) AS max
    FROM measurement
    WHERE date >= ?1 AND date <= ?2";

impl Store {
    /// Date and precipitation for every measurement on or after `cutoff`. Missing
    /// precipitation stays `None`.
    pub async fn recent_precipitation(
        &self,
        cutoff: NaiveDate,
    ) -> Result<Vec<(String, Option<f64>)>, sqlx::Error> {
        sqlx::query_as("SELECT date, prcp FROM measurement WHERE date >= ?1")
            .bind(cutoff.format(DATE_FORMAT).to_string())
            .fetch_all(&self.pool)
            .await
    }

    pub async fn station_ids(&self) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT station FROM station")
            .fetch_all(&self.pool)
            .await
    }

    /// Temperatures recorded at `station_id` on or after `cutoff`.
    pub async fn station_observations(
        &self,
        station_id: &str,
        cutoff: NaiveDate,
    ) -> Result<Vec<Option<f64>>, sqlx::Error> {
        sqlx::query_scalar("SELECT tobs FROM measurement WHERE station = ?1 AND date >= ?2")
            .bind(station_id)
            .bind(cutoff.format(DATE_FORMAT).to_string())
            .fetch_all(&self.pool)
            .await
    }

    /// Min, average and max temperature from `start`, bounded by `end` when given.
    ///
    /// Bounds are compared as text exactly as supplied.
    pub async fn temp_stats(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TempStats, sqlx::Error> {
        let query = match end {
            None => sqlx::query_as(TEMP_STATS_FROM).bind(start),
            Some(end) => sqlx::query_as(TEMP_STATS_BETWEEN).bind(start).bind(end),
        };

        query.fetch_one(&self.pool).await
    }
}

// -- Tests -------------------------------------------------------------------
