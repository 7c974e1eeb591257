//! The canonical normalized satellite entity.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{OrbitClass, Region};

/// Heaviest mass a record may carry. Catalog values above it are treated as
/// unparseable, which keeps per-year sums far from `u64::MAX`.
pub const MAX_MASS_KG: u64 = 1_000_000_000_000;

/// One catalog entry that passed mass, date, and year filtering.
///
/// Every instance has `0 < mass_kg <= MAX_MASS_KG` and `year >= min_year`; records failing
/// either check are never constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteRecord {
    /// Satellite name, `"Unknown"` when the catalog cell is blank.
    pub name: String,
    /// Launch date as `YYYY-MM-DD`.
    pub launch_date: String,
    /// Launch year, drives all filtering and grouping.
    pub year: i32,
    /// Mass in kilograms, rounded from the catalog value.
    pub mass_kg: u64,
    pub owner: String,
    /// Raw state code, trimmed.
    pub state: String,
    pub region: Region,
    pub orbit: OrbitClass,
}

impl SatelliteRecord {
    /// Year as the string key used by the output document.
    #[must_use]
    pub fn year_key(&self) -> String {
        self.year.to_string()
    }
}
