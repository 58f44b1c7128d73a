//! Shared SQLite fixtures for integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use rusqlite::{params, Connection};
use tempfile::TempDir;

use surfsup::dataset::{Dataset, QueryPolicy, TemperatureStats, DEFAULT_MOST_ACTIVE_STATION};

/// `(date, station, prcp, tobs)`
pub type MeasurementFixture<'a> = (&'a str, &'a str, Option<f64>, f64);

/// Create a dataset file shaped like `hawaii.sqlite`
pub fn write_dataset(
    tmp: &TempDir,
    stations: &[&str],
    measurements: &[MeasurementFixture<'_>],
) -> PathBuf {
    let path = tmp.path().join("hawaii.sqlite");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT
        );
        CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp FLOAT,
            tobs FLOAT
        );",
    )
    .unwrap();

    for code in stations {
        conn.execute(
            "INSERT INTO station (station, name, latitude, longitude, elevation)
             VALUES (?1, ?2, 21.3, -157.8, 3.0)",
            params![code, format!("{} station", code)],
        )
        .unwrap();
    }

    for (date, station, prcp, tobs) in measurements {
        conn.execute(
            "INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)",
            params![station, date, prcp, tobs],
        )
        .unwrap();
    }

    path
}

/// Open a fixture with both cutoffs lowered to cover any test data
pub fn open_with_low_cutoff(
    tmp: &TempDir,
    stations: &[&str],
    measurements: &[MeasurementFixture<'_>],
) -> Dataset {
    let path = write_dataset(tmp, stations, measurements);
    Dataset::open(path, QueryPolicy::with_cutoff("2000-01-01")).unwrap()
}

/// A small slice of the Hawaii dataset spanning the default cutoffs
pub fn hawaii_sample() -> Vec<MeasurementFixture<'static>> {
    vec![
        ("2016-08-20", DEFAULT_MOST_ACTIVE_STATION, Some(0.5), 75.0),
        ("2016-08-23", "USC00519397", Some(0.0), 81.0),
        ("2016-08-23", DEFAULT_MOST_ACTIVE_STATION, Some(1.79), 77.0),
        ("2016-08-24", "USC00519397", Some(0.08), 79.0),
        ("2016-08-24", DEFAULT_MOST_ACTIVE_STATION, Some(2.15), 77.0),
        ("2017-08-18", DEFAULT_MOST_ACTIVE_STATION, None, 79.0),
        ("2017-08-01", DEFAULT_MOST_ACTIVE_STATION, Some(0.0), 83.0),
        ("2017-08-23", "USC00519397", Some(0.0), 81.0),
        ("2010-01-01", "USC00519397", Some(0.08), 65.0),
    ]
}

pub const HAWAII_STATIONS: &[&str] = &[
    "USC00519397",
    DEFAULT_MOST_ACTIVE_STATION,
    "USC00513117",
];

/// Aggregate row for a selection with no measurements
pub const NULL_STATS: TemperatureStats = TemperatureStats {
    min_temp: None,
    avg_temp: None,
    max_temp: None,
};
