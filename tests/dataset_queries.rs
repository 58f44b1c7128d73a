//! Dataset Query Tests
//!
//! The five canned queries against SQLite fixtures:
//! - precipitation rows arrive unmerged, in table order
//! - station codes sorted, not deduplicated
//! - tobs restricted to the most active station, ordered by date
//! - aggregates always yield one row, all-null when nothing matched

mod common;

use common::{hawaii_sample, open_with_low_cutoff, write_dataset, HAWAII_STATIONS, NULL_STATS};
use surfsup::dataset::{Dataset, DatasetError, QueryPolicy, DEFAULT_MOST_ACTIVE_STATION};
use tempfile::TempDir;

fn hawaii(tmp: &TempDir) -> Dataset {
    let path = write_dataset(tmp, HAWAII_STATIONS, &hawaii_sample());
    Dataset::open(path, QueryPolicy::default()).unwrap()
}

fn assert_close(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("expected a value, got null");
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

// =============================================================================
// Precipitation
// =============================================================================

#[test]
fn test_precipitation_respects_default_cutoff() {
    let tmp = TempDir::new().unwrap();
    let rows = hawaii(&tmp).precipitation_since_cutoff().unwrap();

    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|r| r.date.as_str() >= "2016-08-24"));
}

#[test]
fn test_precipitation_keeps_duplicate_dates_in_order() {
    let tmp = TempDir::new().unwrap();
    let dataset = open_with_low_cutoff(
        &tmp,
        &["USC1", "USC2"],
        &[
            ("2017-01-01", "USC1", Some(0.1), 70.0),
            ("2017-01-01", "USC2", Some(0.3), 72.0),
        ],
    );

    let rows = dataset.precipitation_since_cutoff().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].prcp, Some(0.1));
    assert_eq!(rows[1].prcp, Some(0.3));
}

#[test]
fn test_precipitation_null_preserved() {
    let tmp = TempDir::new().unwrap();
    let rows = hawaii(&tmp).precipitation_since_cutoff().unwrap();
    let missing = rows.iter().find(|r| r.date == "2017-08-18").unwrap();
    assert_eq!(missing.prcp, None);
}

// =============================================================================
// Stations
// =============================================================================

#[test]
fn test_station_codes_sorted() {
    let tmp = TempDir::new().unwrap();
    let dataset = open_with_low_cutoff(&tmp, &["USC2", "USC1"], &[]);
    assert_eq!(dataset.station_codes().unwrap(), vec!["USC1", "USC2"]);
}

#[test]
fn test_station_codes_not_deduplicated() {
    let tmp = TempDir::new().unwrap();
    let dataset = open_with_low_cutoff(&tmp, &["USC2", "USC1", "USC2"], &[]);
    assert_eq!(dataset.station_codes().unwrap(), vec!["USC1", "USC2", "USC2"]);
}

// =============================================================================
// Most active station observations
// =============================================================================

#[test]
fn test_observations_only_for_most_active_station() {
    let tmp = TempDir::new().unwrap();
    let observations = hawaii(&tmp).most_active_observations().unwrap();

    let dates: Vec<_> = observations.iter().map(|o| o.date.as_str()).collect();
    assert_eq!(
        dates,
        vec!["2016-08-23", "2016-08-24", "2017-08-01", "2017-08-18"]
    );
    assert_eq!(observations[0].tobs, Some(77.0));
    assert_eq!(observations[0].prcp, Some(1.79));
    assert_eq!(observations[3].prcp, None);
}

#[test]
fn test_observations_non_decreasing_by_date() {
    let tmp = TempDir::new().unwrap();
    let dataset = open_with_low_cutoff(
        &tmp,
        &[DEFAULT_MOST_ACTIVE_STATION],
        &[
            ("2017-03-01", DEFAULT_MOST_ACTIVE_STATION, Some(0.0), 70.0),
            ("2017-01-01", DEFAULT_MOST_ACTIVE_STATION, Some(0.0), 68.0),
            ("2017-03-01", DEFAULT_MOST_ACTIVE_STATION, Some(0.2), 71.0),
            ("2017-02-01", DEFAULT_MOST_ACTIVE_STATION, Some(0.1), 69.0),
        ],
    );

    let observations = dataset.most_active_observations().unwrap();
    assert_eq!(observations.len(), 4);
    assert!(observations.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn test_observations_follow_configured_station() {
    let tmp = TempDir::new().unwrap();
    let path = write_dataset(&tmp, HAWAII_STATIONS, &hawaii_sample());
    let policy = QueryPolicy {
        most_active_station: "USC00519397".to_string(),
        ..QueryPolicy::with_cutoff("2000-01-01")
    };
    let dataset = Dataset::open(path, policy).unwrap();

    let observations = dataset.most_active_observations().unwrap();
    assert_eq!(observations.len(), 4);
    assert_eq!(observations[0].date, "2010-01-01");
}

// =============================================================================
// Temperature aggregates
// =============================================================================

#[test]
fn test_stats_since_before_all_data_is_global() {
    let tmp = TempDir::new().unwrap();
    let stats = hawaii(&tmp).temperature_stats_since("1900-01-01").unwrap();

    assert_close(stats.min_temp, 65.0);
    assert_close(stats.max_temp, 83.0);
    assert_close(stats.avg_temp, 697.0 / 9.0);
}

#[test]
fn test_stats_since_after_all_data_is_null() {
    let tmp = TempDir::new().unwrap();
    let stats = hawaii(&tmp).temperature_stats_since("2099-01-01").unwrap();
    assert_eq!(stats, NULL_STATS);
}

#[test]
fn test_stats_between_inclusive() {
    let tmp = TempDir::new().unwrap();
    let stats = hawaii(&tmp)
        .temperature_stats_between("2016-08-23", "2016-08-24")
        .unwrap();

    assert_close(stats.min_temp, 77.0);
    assert_close(stats.max_temp, 81.0);
    assert_close(stats.avg_temp, (81.0 + 77.0 + 79.0 + 77.0) / 4.0);
}

#[test]
fn test_stats_between_reversed_range_is_null() {
    let tmp = TempDir::new().unwrap();
    let stats = hawaii(&tmp)
        .temperature_stats_between("2017-08-23", "2016-08-23")
        .unwrap();
    assert_eq!(stats, NULL_STATS);
}

#[test]
fn test_stats_malformed_date_compared_as_text() {
    let tmp = TempDir::new().unwrap();
    let dataset = hawaii(&tmp);

    // Letters sort after digits, so nothing qualifies
    assert_eq!(dataset.temperature_stats_since("yesterday").unwrap(), NULL_STATS);

    // A bare year is a prefix of every date in it and sorts before them
    let stats = dataset.temperature_stats_since("2017").unwrap();
    assert_close(stats.min_temp, 79.0);
    assert_close(stats.max_temp, 83.0);
}

#[test]
fn test_stats_on_empty_table_is_null() {
    let tmp = TempDir::new().unwrap();
    let dataset = open_with_low_cutoff(&tmp, &[], &[]);
    assert_eq!(dataset.temperature_stats_since("2000-01-01").unwrap(), NULL_STATS);
}

// =============================================================================
// Failure and summary
// =============================================================================

#[test]
fn test_query_after_file_removed_is_unavailable() {
    let tmp = TempDir::new().unwrap();
    let dataset = hawaii(&tmp);
    std::fs::remove_file(dataset.path()).unwrap();

    let err = dataset.station_codes().unwrap_err();
    assert!(matches!(err, DatasetError::Unavailable { .. }));
}

#[test]
fn test_summary_reports_span() {
    let tmp = TempDir::new().unwrap();
    let summary = hawaii(&tmp).summary().unwrap();

    assert_eq!(summary.station_count, 3);
    assert_eq!(summary.measurement_count, 9);
    assert_eq!(summary.first_date.as_deref(), Some("2010-01-01"));
    assert_eq!(summary.last_date.as_deref(), Some("2017-08-23"));
}
