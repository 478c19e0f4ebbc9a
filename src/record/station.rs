use sqlx::FromRow;

/// A weather observation site. Rows live in the `station` table.
///
/// Only read by the startup schema check, which decodes one row to confirm the layout.
#[allow(dead_code)]
#[derive(Debug, FromRow)]
pub struct Station {
    pub station: String,
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

impl Station {
    pub const COLUMNS: &'static str = "station, name, latitude, longitude, elevation";
}
