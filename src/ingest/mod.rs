//! CSV ingestion into the canonical flight-record table.
//!
//! Source CSVs arrive with varying column conventions (domestic extracts
//! carry state codes and city names, international ones carry country names,
//! minimal ones only airport codes). Header names are matched
//! case-insensitively and every fallback chain is resolved **once** into a
//! [`schema::ColumnMap`] before any row is read; the engines downstream only
//! ever see fully-populated canonical fields.
//!
//! Row retention filters applied here:
//! - cargo-only legs (`seats <= 0`) are dropped;
//! - ghost routes (`departures_performed == 0`) are dropped, but only when
//!   the source actually has a departures column.

pub mod fingerprint;
pub mod reader;
pub mod schema;

pub use fingerprint::fingerprint;
pub use reader::read_records;
pub use schema::ColumnMap;

use thiserror::Error;

/// Errors raised while normalizing source CSVs.
///
/// Structural problems are reported with the offending column name rather
/// than silently defaulted; only the documented fallback chains (airline,
/// origin/dest labels, region) ever substitute a value.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A required canonical column is missing from the CSV header.
    #[error("required column '{column}' not found in CSV header")]
    MissingColumn { column: String },

    /// A cell failed numeric parsing.
    #[error("invalid value '{value}' in column '{column}' at row {row}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    /// Month outside 1-12.
    #[error("month {value} out of range 1-12 at row {row}")]
    MonthOutOfRange { row: usize, value: i64 },

    /// Underlying CSV parse failure.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
}
