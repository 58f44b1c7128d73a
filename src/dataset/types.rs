//! Row types returned by dataset queries

use serde::Serialize;

/// One `(date, prcp)` pair from the measurement table
#[derive(Debug, Clone, PartialEq)]
pub struct PrecipitationRow {
    pub date: String,
    pub prcp: Option<f64>,
}

/// A temperature observation for a single station
///
/// Serialized as `{date, tobs, prcp}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureObservation {
    pub date: String,
    pub tobs: Option<f64>,
    pub prcp: Option<f64>,
}

/// Result of a min/avg/max aggregate over `tobs`
///
/// All three fields are `None` when the filter matched no rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureStats {
    pub min_temp: Option<f64>,
    pub avg_temp: Option<f64>,
    pub max_temp: Option<f64>,
}

/// Shape of the dataset, reported by `surfsup check`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub station_count: u64,
    pub measurement_count: u64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}
