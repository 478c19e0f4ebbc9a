use sqlx::FromRow;

/// One dated observation for a station. Rows live in the `measurement` table.
///
/// `date` is kept as the store's `YYYY-MM-DD` text so that range filters compare
/// the same way the store does. Like [`Station`](super::Station), only the startup
/// schema check decodes whole rows.
#[allow(dead_code)]
#[derive(Debug, FromRow)]
pub struct Measurement {
    pub station: String,
    pub date: String,
    pub prcp: Option<f64>,
    pub tobs: Option<f64>,
}

impl Measurement {
    pub const COLUMNS: &'static str = "station, date, prcp, tobs";
}
