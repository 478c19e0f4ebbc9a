//! Fixture databases for tests.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

use crate::db::Store;

/// (station, date, prcp, tobs)
pub type FixtureRow = (&'static str, &'static str, Option<f64>, f64);

pub const CREATE_STATION: &str = "CREATE TABLE station (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    station TEXT NOT NULL,
    name TEXT,
    latitude REAL,
    longitude REAL,
    elevation REAL)";

pub const CREATE_MEASUREMENT: &str = "CREATE TABLE measurement (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    station TEXT NOT NULL,
    date TEXT NOT NULL,
    prcp REAL,
    tobs REAL)";

/// Creates a database at `path` and runs `statements` against it.
pub async fn write_database(path: &Path, statements: &[&str]) {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    for statement in statements {
        sqlx::query(statement).execute(&pool).await.unwrap();
    }

    pool.close().await;
}

/// Writes a store with the given stations and measurements, then opens it read-only.
///
/// Keep the returned directory alive for as long as the store is used.
pub async fn fixture_store(stations: &[&str], rows: &[FixtureRow]) -> (TempDir, Store) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hawaii.sqlite");
    write_database(&path, &[CREATE_STATION, CREATE_MEASUREMENT]).await;

    let options = SqliteConnectOptions::new().filename(&path);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    for (i, &station) in stations.iter().enumerate() {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation)
            VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(station)
        .bind(format!("STATION {i}, HI US"))
        .bind(21.3)
        .bind(-157.8)
        .bind(3.0)
        .execute(&pool)
        .await
        .unwrap();
    }

    for &(station, date, prcp, tobs) in rows {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
            .bind(station)
            .bind(date)
            .bind(prcp)
            .bind(tobs)
            .execute(&pool)
            .await
            .unwrap();
    }

    pool.close().await;

    let store = Store::open(&path).await.unwrap();
    (dir, store)
}
