//! The canned queries behind each API route
//!
//! Each operation opens its own connection, runs one statement and drops the
//! connection before returning. Dates are bound as text and compared by
//! SQLite as strings.

use rusqlite::{params, Connection};

use super::errors::{DatasetResult, RusqliteErrorExt};
use super::types::{DatasetSummary, PrecipitationRow, TemperatureObservation, TemperatureStats};
use super::Dataset;

const PRECIPITATION_SQL: &str = "SELECT date, prcp FROM measurement WHERE date >= ?1";

const STATIONS_SQL: &str = "SELECT station FROM station ORDER BY station";

const OBSERVATIONS_SQL: &str = "SELECT date, tobs, prcp FROM measurement \
     WHERE date >= ?1 AND station = ?2 ORDER BY date";

const STATS_SINCE_SQL: &str =
    "SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM measurement WHERE date >= ?1";

const STATS_BETWEEN_SQL: &str =
    "SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM measurement WHERE date >= ?1 AND date <= ?2";

impl Dataset {
    /// All `(date, prcp)` pairs on or after the precipitation cutoff, in
    /// the order SQLite returns them.
    pub fn precipitation_since_cutoff(&self) -> DatasetResult<Vec<PrecipitationRow>> {
        let conn = self.connect()?;
        let mut stmt = conn
            .prepare(PRECIPITATION_SQL)
            .map_err(RusqliteErrorExt::into_dataset_error)?;
        let rows = stmt
            .query_map(params![self.policy().precipitation_cutoff], |row| {
                Ok(PrecipitationRow {
                    date: row.get(0)?,
                    prcp: row.get(1)?,
                })
            })
            .map_err(RusqliteErrorExt::into_dataset_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(RusqliteErrorExt::into_dataset_error)?;
        Ok(rows)
    }

    /// Every station code, ascending. Duplicates in the table are kept.
    pub fn station_codes(&self) -> DatasetResult<Vec<String>> {
        let conn = self.connect()?;
        let mut stmt = conn
            .prepare(STATIONS_SQL)
            .map_err(RusqliteErrorExt::into_dataset_error)?;
        let codes = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(RusqliteErrorExt::into_dataset_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(RusqliteErrorExt::into_dataset_error)?;
        Ok(codes)
    }

    /// Observations for the most active station since the tobs cutoff,
    /// ordered by date.
    pub fn most_active_observations(&self) -> DatasetResult<Vec<TemperatureObservation>> {
        let conn = self.connect()?;
        let policy = self.policy();
        let mut stmt = conn
            .prepare(OBSERVATIONS_SQL)
            .map_err(RusqliteErrorExt::into_dataset_error)?;
        let observations = stmt
            .query_map(
                params![policy.tobs_cutoff, policy.most_active_station],
                |row| {
                    Ok(TemperatureObservation {
                        date: row.get(0)?,
                        tobs: row.get(1)?,
                        prcp: row.get(2)?,
                    })
                },
            )
            .map_err(RusqliteErrorExt::into_dataset_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(RusqliteErrorExt::into_dataset_error)?;
        Ok(observations)
    }

    /// Min/avg/max temperature over every measurement with `date >= start`.
    pub fn temperature_stats_since(&self, start: &str) -> DatasetResult<TemperatureStats> {
        let conn = self.connect()?;
        aggregate(&conn, STATS_SINCE_SQL, params![start])
    }

    /// Min/avg/max temperature over `start <= date <= end`.
    ///
    /// `start > end` is not rejected; it selects nothing.
    pub fn temperature_stats_between(
        &self,
        start: &str,
        end: &str,
    ) -> DatasetResult<TemperatureStats> {
        let conn = self.connect()?;
        aggregate(&conn, STATS_BETWEEN_SQL, params![start, end])
    }

    /// Row counts and date span of the dataset.
    pub fn summary(&self) -> DatasetResult<DatasetSummary> {
        let conn = self.connect()?;
        let station_count: i64 = conn
            .query_row("SELECT COUNT(*) FROM station", [], |row| row.get(0))
            .map_err(RusqliteErrorExt::into_dataset_error)?;
        let (measurement_count, first_date, last_date): (i64, Option<String>, Option<String>) =
            conn.query_row(
                "SELECT COUNT(*), MIN(date), MAX(date) FROM measurement",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .map_err(RusqliteErrorExt::into_dataset_error)?;

        Ok(DatasetSummary {
            station_count: u64::try_from(station_count).unwrap_or(0),
            measurement_count: u64::try_from(measurement_count).unwrap_or(0),
            first_date,
            last_date,
        })
    }
}

/// Run a `MIN, AVG, MAX` statement. SQLite always yields one row for an
/// ungrouped aggregate, with NULLs when nothing matched.
fn aggregate(
    conn: &Connection,
    sql: &str,
    bounds: &[&dyn rusqlite::ToSql],
) -> DatasetResult<TemperatureStats> {
    conn.query_row(sql, bounds, |row| {
        Ok(TemperatureStats {
            min_temp: row.get(0)?,
            avg_temp: row.get(1)?,
            max_temp: row.get(2)?,
        })
    })
    .map_err(RusqliteErrorExt::into_dataset_error)
}
