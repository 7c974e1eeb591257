//! Static mass-bin table.
//!
//! Bins are half-open `[min, max)` kilogram intervals. The table must start
//! at 0 and be contiguous: each bin's `min` is the previous bin's `max`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// One half-open kilogram interval used to histogram satellite mass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MassBin {
    pub min: u64,
    pub max: u64,
    pub label: String,
}

impl MassBin {
    #[must_use]
    pub fn new(min: u64, max: u64, label: impl Into<String>) -> Self {
        Self {
            min,
            max,
            label: label.into(),
        }
    }

    /// Whether `mass_kg` falls inside `[min, max)`.
    #[must_use]
    pub const fn contains(&self, mass_kg: u64) -> bool {
        mass_kg >= self.min && mass_kg < self.max
    }
}

/// Default bins covering 0 kg to 150 t.
const DEFAULT_BINS: [(u64, u64, &str); 11] = [
    (0, 50, "0-50 kg"),
    (50, 100, "50-100 kg"),
    (100, 300, "100-300 kg"),
    (300, 500, "300-500 kg"),
    (500, 1_000, "500 kg - 1 t"),
    (1_000, 2_000, "1-2 t"),
    (2_000, 5_000, "2-5 t"),
    (5_000, 10_000, "5-10 t"),
    (10_000, 20_000, "10-20 t"),
    (20_000, 50_000, "20-50 t"),
    (50_000, 150_000, "50-150 t"),
];

/// The default mass-bin table.
#[must_use]
pub fn default_mass_bins() -> Vec<MassBin> {
    DEFAULT_BINS
        .iter()
        .map(|(min, max, label)| MassBin::new(*min, *max, *label))
        .collect()
}

/// Check that `bins` is non-empty, starts at 0, and has no gaps, overlaps,
/// or empty intervals.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] naming the first offending bin.
pub fn validate_bins(bins: &[MassBin]) -> Result<(), CoreError> {
    let Some(first) = bins.first() else {
        return Err(CoreError::Validation("mass bin table is empty".into()));
    };
    if first.min != 0 {
        return Err(CoreError::Validation(format!(
            "first mass bin `{}` must start at 0 kg, starts at {}",
            first.label, first.min
        )));
    }

    let mut expected_min = 0;
    for bin in bins {
        if bin.min >= bin.max {
            return Err(CoreError::Validation(format!(
                "mass bin `{}` is empty: min {} >= max {}",
                bin.label, bin.min, bin.max
            )));
        }
        if bin.min != expected_min {
            return Err(CoreError::Validation(format!(
                "mass bin `{}` starts at {} but the previous bin ends at {expected_min}",
                bin.label, bin.min
            )));
        }
        expected_min = bin.max;
    }
    Ok(())
}
