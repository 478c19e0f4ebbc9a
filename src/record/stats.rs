use sqlx::FromRow;

/// Temperature aggregate over a date range. Every field is `None` when no rows match.
#[derive(Debug, Clone, Copy, Default, PartialEq, FromRow)]
pub struct TempStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TempStats {
    /// Flattens to `[min, avg, max]`.
    pub fn to_array(self) -> [Option<f64>; 3] {
        [self.min, self.avg, self.max]
    }
}

// -- Tests -------------------------------------------------------------------
