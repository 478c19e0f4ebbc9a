use std::{path::Path, time::Duration};

use anyhow::{Context, Result};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use tracing::{debug, info};

use crate::record::{Measurement, Station};

/// Requests queue on the single connection for as long as the query ahead of them takes.
const UNBOUNDED_WAIT: Duration = Duration::from_secs(u32::MAX as u64);

/// Handle on the climate store.
///
/// Holds the process's single connection. Clones share it; [`Store::close`] releases it.
#[derive(Debug, Clone)]
pub struct Store {
    pub(super) pool: SqlitePool,
}

impl Store {
    /// Opens an existing store read-only and checks that both tables carry the
    /// columns the queries depend on.
    pub async fn open(path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .acquire_timeout(UNBOUNDED_WAIT)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open database `{}`", path.display()))?;

        let store = Store { pool };
        store.check_schema().await?;

        info!(database = %path.display(), "Database opened");

        Ok(store)
    }

    async fn check_schema(&self) -> Result<()> {
        let sql = format!("SELECT {} FROM station LIMIT 1", Station::COLUMNS);
        let station: Option<Station> = sqlx::query_as(&sql)
            .fetch_optional(&self.pool)
            .await
            .context("Table `station` does not match the expected layout")?;
        debug!(?station, "Station table checked");

        let sql = format!("SELECT {} FROM measurement LIMIT 1", Measurement::COLUMNS);
        let measurement: Option<Measurement> = sqlx::query_as(&sql)
            .fetch_optional(&self.pool)
            .await
            .context("Table `measurement` does not match the expected layout")?;
        debug!(?measurement, "Measurement table checked");

        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database closed");
    }
}

// -- Tests -------------------------------------------------------------------
