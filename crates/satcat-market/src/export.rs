//! CSV export of addressable satellites.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use satcat_core::record::SatelliteRecord;
use serde::Serialize;

use crate::error::MarketError;
use crate::query::MarketQuery;

const HEADERS: [&str; 7] = [
    "Name",
    "Launch Date",
    "Mass (kg)",
    "Owner",
    "State",
    "Region",
    "Orbit",
];

#[derive(Serialize)]
struct ExportRow<'a> {
    name: &'a str,
    launch_date: &'a str,
    mass_kg: u64,
    owner: &'a str,
    state: &'a str,
    region: &'a str,
    orbit: &'a str,
}

impl<'a> From<&'a SatelliteRecord> for ExportRow<'a> {
    fn from(record: &'a SatelliteRecord) -> Self {
        Self {
            name: &record.name,
            launch_date: &record.launch_date,
            mass_kg: record.mass_kg,
            owner: &record.owner,
            state: &record.state,
            region: record.region.as_str(),
            orbit: record.orbit.as_str(),
        }
    }
}

/// Write `satellites` as CSV, header first, quoting fields only where needed.
///
/// # Errors
///
/// Returns [`MarketError::Csv`] if serialization or the underlying writer fails.
pub fn export_csv<W: Write>(writer: W, satellites: &[SatelliteRecord]) -> Result<(), MarketError> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(HEADERS)?;
    for record in satellites {
        csv.serialize(ExportRow::from(record))?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write the CSV to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`MarketError::Io`] if the file cannot be created and
/// [`MarketError::Csv`] if writing fails.
pub fn export_to_path(path: &Path, satellites: &[SatelliteRecord]) -> Result<(), MarketError> {
    let io_err = |source| MarketError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let file = File::create(path).map_err(io_err)?;
    export_csv(file, satellites)?;
    tracing::info!(path = %path.display(), rows = satellites.len(), "wrote satellite export");
    Ok(())
}

/// Download name for a query's export, e.g.
/// `satellites_15t_2023_Western-Europe.csv`.
#[must_use]
pub fn export_file_name(query: &MarketQuery) -> String {
    let tonnes = (query.capacity_kg + 500) / 1000;
    let region = query
        .region
        .as_str()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("satellites_{tonnes}t_{}_{region}.csv", query.period)
}
