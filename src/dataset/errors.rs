//! Dataset error types
//!
//! Every dataset failure is a server-side failure. Nothing here is retried.

use thiserror::Error;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Dataset errors
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Database file missing, locked, or not a SQLite file
    #[error("Dataset unavailable at {path}: {reason}")]
    Unavailable { path: String, reason: String },

    /// Expected table absent from the database file
    #[error("Missing table: {0}")]
    MissingTable(String),

    /// Expected column absent from an existing table
    #[error("Missing column: {table}.{column}")]
    MissingColumn { table: String, column: String },

    /// Engine-level failure while running a query
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// The blocking task running a query panicked or was cancelled
    #[error("Query task aborted: {0}")]
    TaskAborted(String),
}

impl DatasetError {
    /// Error code string, `SURFSUP_DATASET_*`
    pub fn code(&self) -> &'static str {
        match self {
            DatasetError::Unavailable { .. } => "SURFSUP_DATASET_UNAVAILABLE",
            DatasetError::MissingTable(_) => "SURFSUP_DATASET_MISSING_TABLE",
            DatasetError::MissingColumn { .. } => "SURFSUP_DATASET_MISSING_COLUMN",
            DatasetError::QueryFailed(_) => "SURFSUP_DATASET_QUERY_FAILED",
            DatasetError::TaskAborted(_) => "SURFSUP_DATASET_TASK_ABORTED",
        }
    }

    /// Schema errors are only raised at boot and stop the process
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            DatasetError::MissingTable(_) | DatasetError::MissingColumn { .. }
        )
    }
}

/// Extension trait for converting rusqlite errors into dataset errors.
pub trait RusqliteErrorExt {
    fn into_dataset_error(self) -> DatasetError;
}

impl RusqliteErrorExt for rusqlite::Error {
    fn into_dataset_error(self) -> DatasetError {
        DatasetError::QueryFailed(self.to_string())
    }
}
