//! # Climate dataset access
//!
//! Read-only access to the SQLite file holding the `station` and
//! `measurement` tables.
//!
//! A [`Dataset`] is constructed once at boot. Construction verifies the
//! declared schema; after that each query opens a fresh read-only
//! connection and releases it before returning, so the handle itself is
//! cheap to clone and safe to share across request tasks.

mod errors;
mod queries;
pub mod schema;
mod types;

pub use errors::{DatasetError, DatasetResult, RusqliteErrorExt};
pub use types::{DatasetSummary, PrecipitationRow, TemperatureObservation, TemperatureStats};

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use serde::{Deserialize, Serialize};

/// Default lower bound for the precipitation route
pub const DEFAULT_PRECIPITATION_CUTOFF: &str = "2016-08-24";

/// Default lower bound for the tobs route
pub const DEFAULT_TOBS_CUTOFF: &str = "2016-08-23";

/// Station with the most observations in the Hawaii dataset
pub const DEFAULT_MOST_ACTIVE_STATION: &str = "USC00519281";

/// Fixed parameters of the canned "last year" queries
///
/// The cutoffs are literal dates tied to the snapshot the service was built
/// for; they do not move with the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPolicy {
    #[serde(default = "default_precipitation_cutoff")]
    pub precipitation_cutoff: String,

    #[serde(default = "default_tobs_cutoff")]
    pub tobs_cutoff: String,

    #[serde(default = "default_most_active_station")]
    pub most_active_station: String,
}

fn default_precipitation_cutoff() -> String {
    DEFAULT_PRECIPITATION_CUTOFF.to_string()
}

fn default_tobs_cutoff() -> String {
    DEFAULT_TOBS_CUTOFF.to_string()
}

fn default_most_active_station() -> String {
    DEFAULT_MOST_ACTIVE_STATION.to_string()
}

impl Default for QueryPolicy {
    fn default() -> Self {
        Self {
            precipitation_cutoff: default_precipitation_cutoff(),
            tobs_cutoff: default_tobs_cutoff(),
            most_active_station: default_most_active_station(),
        }
    }
}

impl QueryPolicy {
    /// Policy with both cutoffs set to `cutoff`
    pub fn with_cutoff(cutoff: impl Into<String>) -> Self {
        let cutoff = cutoff.into();
        Self {
            precipitation_cutoff: cutoff.clone(),
            tobs_cutoff: cutoff,
            ..Default::default()
        }
    }
}

/// Handle to the dataset file
#[derive(Debug, Clone)]
pub struct Dataset {
    path: PathBuf,
    policy: QueryPolicy,
}

impl Dataset {
    /// Open the dataset at `path` and verify its schema.
    ///
    /// Fails if the file is missing, is not a SQLite database, or lacks any
    /// of the tables and columns in [`schema::EXPECTED_TABLES`].
    pub fn open(path: impl AsRef<Path>, policy: QueryPolicy) -> DatasetResult<Self> {
        let dataset = Self {
            path: path.as_ref().to_path_buf(),
            policy,
        };
        let conn = dataset.connect()?;
        schema::verify(&conn).map_err(|e| dataset.classify(e))?;
        Ok(dataset)
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parameters used by the canned queries
    pub fn policy(&self) -> &QueryPolicy {
        &self.policy
    }

    /// Open a read-only connection scoped to the caller.
    ///
    /// The connection closes when dropped.
    pub(crate) fn connect(&self) -> DatasetResult<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        Connection::open_with_flags(&self.path, flags).map_err(|e| self.unavailable(e))
    }

    fn unavailable(&self, err: impl ToString) -> DatasetError {
        DatasetError::Unavailable {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// A file that opens but cannot be read as SQLite fails on its first
    /// statement. Report that as unavailable rather than as a bad query.
    fn classify(&self, err: DatasetError) -> DatasetError {
        match err {
            DatasetError::QueryFailed(reason) => self.unavailable(reason),
            other => other,
        }
    }
}
