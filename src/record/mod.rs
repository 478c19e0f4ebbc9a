//! Record kinds held by the climate store.

pub mod measurement;
pub mod station;
pub mod stats;

pub use measurement::Measurement;
pub use station::Station;
pub use stats::TempStats;
