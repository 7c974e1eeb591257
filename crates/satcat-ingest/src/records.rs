//! Row-to-record fold.
//!
//! Each row is checked in a fixed order: mass, then launch date, then year.
//! The first failing check decides the skip reason and later checks are not
//! evaluated. Counters live in the returned [`IngestOutcome`].

use satcat_core::record::{MAX_MASS_KG, SatelliteRecord};

use crate::normalize::{RegionTables, classify_orbit, parse_date, parse_mass};
use crate::tsv::{Catalog, Column, RawRow};

/// Row filters applied while building records.
#[derive(Debug, Clone)]
pub struct RecordFilter {
    /// Launches before this year are dropped.
    pub min_year: i32,
    pub regions: RegionTables,
}

impl Default for RecordFilter {
    fn default() -> Self {
        Self {
            min_year: 2015,
            regions: RegionTables::default(),
        }
    }
}

/// Why a row did not become a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Mass column missing, unparseable, under half a kilogram, or above
    /// [`MAX_MASS_KG`].
    NoMass,
    /// Launch date column missing or unparseable.
    NoDate,
    /// Launch year before the configured minimum.
    BeforeMinYear,
}

/// Records plus per-reason skip counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestOutcome {
    pub records: Vec<SatelliteRecord>,
    pub skipped_no_mass: usize,
    pub skipped_no_date: usize,
    pub skipped_old_date: usize,
}

impl IngestOutcome {
    fn push(mut self, row: Result<SatelliteRecord, SkipReason>) -> Self {
        match row {
            Ok(record) => self.records.push(record),
            Err(SkipReason::NoMass) => self.skipped_no_mass += 1,
            Err(SkipReason::NoDate) => self.skipped_no_date += 1,
            Err(SkipReason::BeforeMinYear) => self.skipped_old_date += 1,
        }
        self
    }

    /// Rows dropped for any reason.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped_no_mass + self.skipped_no_date + self.skipped_old_date
    }
}

/// Round `kg` to whole kilograms, keeping it only inside `1..=MAX_MASS_KG`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn whole_kg(kg: f64) -> Option<u64> {
    let kg = kg.round();
    // In range, so the cast is exact.
    (1.0..=MAX_MASS_KG as f64).contains(&kg).then_some(kg as u64)
}

/// Build a record from one row, or report why it was dropped.
///
/// # Errors
///
/// Returns the [`SkipReason`] of the first failing check.
pub fn build_record(
    catalog: &Catalog,
    row: &RawRow,
    filter: &RecordFilter,
) -> Result<SatelliteRecord, SkipReason> {
    let field = |column| catalog.get(row, column);

    let mass_kg = field(Column::Mass)
        .and_then(parse_mass)
        .and_then(whole_kg)
        .ok_or(SkipReason::NoMass)?;

    let launch = field(Column::LaunchDate)
        .and_then(parse_date)
        .ok_or(SkipReason::NoDate)?;
    if launch.year < filter.min_year {
        return Err(SkipReason::BeforeMinYear);
    }

    let state = field(Column::State).unwrap_or_default().to_string();
    let name = field(Column::Name)
        .filter(|n| !n.is_empty())
        .unwrap_or("Unknown");

    Ok(SatelliteRecord {
        name: name.to_string(),
        launch_date: launch.date,
        year: launch.year,
        mass_kg,
        owner: field(Column::Owner).unwrap_or_default().to_string(),
        region: filter.regions.classify(&state),
        state,
        orbit: classify_orbit(field(Column::OpOrbit).unwrap_or_default()),
    })
}

/// Fold every catalog row into records and skip counters.
#[must_use]
pub fn build_records(catalog: &Catalog, filter: &RecordFilter) -> IngestOutcome {
    catalog
        .rows
        .iter()
        .map(|row| build_record(catalog, row, filter))
        .fold(IngestOutcome::default(), IngestOutcome::push)
}
