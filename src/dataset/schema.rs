//! Declared dataset schema and its startup verification
//!
//! The database file is authoritative for data, but the columns the queries
//! read are declared here. A file that lacks any of them is rejected at boot
//! rather than failing on the first request.

use std::collections::HashSet;

use rusqlite::Connection;

use super::errors::{DatasetError, DatasetResult, RusqliteErrorExt};

/// A table and the columns the queries depend on
#[derive(Debug, Clone, Copy)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

pub const STATION_TABLE: TableDef = TableDef {
    name: "station",
    columns: &["station"],
};

pub const MEASUREMENT_TABLE: TableDef = TableDef {
    name: "measurement",
    columns: &["station", "date", "prcp", "tobs"],
};

/// Every table the service reads
pub const EXPECTED_TABLES: &[TableDef] = &[STATION_TABLE, MEASUREMENT_TABLE];

/// Columns present on `table`, read with `PRAGMA table_info`.
///
/// An absent table yields an empty set.
fn table_columns(conn: &Connection, table: &str) -> DatasetResult<HashSet<String>> {
    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info(?1)")
        .map_err(RusqliteErrorExt::into_dataset_error)?;
    let names = stmt
        .query_map([table], |row| row.get::<_, String>(0))
        .map_err(RusqliteErrorExt::into_dataset_error)?
        .collect::<Result<HashSet<_>, _>>()
        .map_err(RusqliteErrorExt::into_dataset_error)?;
    Ok(names)
}

/// Verify that every expected table and column exists.
pub fn verify(conn: &Connection) -> DatasetResult<()> {
    for table in EXPECTED_TABLES {
        let present = table_columns(conn, table.name)?;
        if present.is_empty() {
            return Err(DatasetError::MissingTable(table.name.to_string()));
        }
        if let Some(column) = table.columns.iter().find(|c| !present.contains(**c)) {
            return Err(DatasetError::MissingColumn {
                table: table.name.to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}
