//! Ingest error types.
//!
//! Only structural failures are errors. A bad field drops its record and is
//! counted in [`crate::records::IngestOutcome`]; it never surfaces here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// The document has no data after the header line.
    #[error("catalog appears empty: expected a header and at least one data line, found {lines} line(s)")]
    Malformed { lines: usize },

    /// Tab splitting failed on a data row.
    #[error("failed to split catalog row: {0}")]
    Row(#[from] csv::Error),
}
