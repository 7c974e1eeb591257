//! # satcat-market
//!
//! Launcher sizing over a written snapshot: which satellites in a period
//! and region a launcher of a given capacity could have carried, what share
//! of the market that is, and a CSV export of the list.

mod error;
pub mod export;
pub mod query;
pub mod sizing;

pub use error::MarketError;
pub use export::{export_csv, export_file_name, export_to_path};
pub use query::{DEFAULT_CAPACITY_KG, DEFAULT_PRICE_PER_KG_EUR, MarketQuery, Period};
pub use sizing::{HistogramBin, Kpis, SizingReport, size};

use std::path::Path;

use satcat_core::document::OutputDocument;

/// Read a snapshot written by the ingest pipeline.
///
/// # Errors
///
/// Returns [`MarketError::Io`] if the file cannot be read and
/// [`MarketError::Json`] if it is not a valid document.
pub fn load_document(path: &Path) -> Result<OutputDocument, MarketError> {
    let text = std::fs::read_to_string(path).map_err(|source| MarketError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| MarketError::Json {
        path: path.to_path_buf(),
        source,
    })
}
