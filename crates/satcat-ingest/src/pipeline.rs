//! Parse, normalize, and aggregate in one pass over the catalog text.

use chrono::NaiveDate;
use satcat_core::bins::MassBin;
use satcat_core::document::{Attribution, OutputDocument};

use crate::aggregate::{AggregateOptions, aggregate};
use crate::error::IngestError;
use crate::normalize::RegionTables;
use crate::records::{RecordFilter, build_records};
use crate::tsv::{self, Column};

/// Everything [`process`] needs besides the catalog text.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub filter: RecordFilter,
    pub aggregate: AggregateOptions,
}

impl PipelineOptions {
    /// Options with one `min_year` shared by the row filter and the
    /// document metadata.
    #[must_use]
    pub fn new(
        min_year: i32,
        regions: RegionTables,
        mass_bins: Vec<MassBin>,
        attribution: Attribution,
        processed_date: NaiveDate,
    ) -> Self {
        Self {
            filter: RecordFilter { min_year, regions },
            aggregate: AggregateOptions {
                mass_bins,
                min_year,
                attribution,
                processed_date,
            },
        }
    }
}

/// Row counts reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessStats {
    /// Lines after the header, blank and comment lines included.
    pub total_data_lines: usize,
    pub skipped_no_mass: usize,
    pub skipped_no_date: usize,
    pub skipped_old_date: usize,
    pub valid: usize,
}

/// A finished document plus the counts that produced it.
#[derive(Debug, Clone)]
pub struct Processed {
    pub document: OutputDocument,
    pub stats: ProcessStats,
}

/// Run the whole transformation over raw catalog text.
///
/// # Errors
///
/// Returns [`IngestError`] if the text has no data line or a row cannot be
/// split. Bad field values never fail the run; they are counted in
/// [`ProcessStats`].
pub fn process(text: &str, options: &PipelineOptions) -> Result<Processed, IngestError> {
    let catalog = tsv::parse(text)?;
    tracing::debug!(
        columns = catalog.header.len(),
        name = ?catalog.columns.index(Column::Name),
        ldate = ?catalog.columns.index(Column::LaunchDate),
        mass = ?catalog.columns.index(Column::Mass),
        owner = ?catalog.columns.index(Column::Owner),
        state = ?catalog.columns.index(Column::State),
        op_orbit = ?catalog.columns.index(Column::OpOrbit),
        "resolved catalog columns"
    );
    for column in catalog.columns.missing() {
        tracing::warn!(column = column.as_str(), "catalog column not found");
    }

    let outcome = build_records(&catalog, &options.filter);
    let stats = ProcessStats {
        total_data_lines: catalog.total_data_lines,
        skipped_no_mass: outcome.skipped_no_mass,
        skipped_no_date: outcome.skipped_no_date,
        skipped_old_date: outcome.skipped_old_date,
        valid: outcome.records.len(),
    };
    tracing::info!(
        rows = stats.total_data_lines,
        skipped_no_mass = stats.skipped_no_mass,
        skipped_no_date = stats.skipped_no_date,
        skipped_old_date = stats.skipped_old_date,
        min_year = options.filter.min_year,
        valid = stats.valid,
        "normalized catalog rows"
    );

    let document = aggregate(outcome.records, &options.aggregate);
    Ok(Processed { document, stats })
}
