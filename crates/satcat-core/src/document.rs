//! The output document: the sole contract with the dashboard.
//!
//! The UI reads `distributions[region][year]` for charts and tables and
//! `satellites` for listings and export. The document is a fully replacing
//! snapshot; any shape change needs a coordinated UI update.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::bins::MassBin;
use crate::enums::DistributionRegion;
use crate::record::SatelliteRecord;
use crate::units::serialize_number;

/// Source attribution copied into every document's [`Metadata`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    pub source: String,
    pub source_url: String,
    pub citation: String,
    pub license: String,
    /// First year the dashboard renders as forecast rather than history.
    pub forecast_boundary: i32,
}

impl Default for Attribution {
    /// GCAT attribution as required by its CC-BY license.
    fn default() -> Self {
        Self {
            source: "GCAT (General Catalog of Artificial Space Objects)".into(),
            source_url: "https://planet4589.org/space/gcat/".into(),
            citation: "data from GCAT (J. McDowell, planet4589.org/space/gcat)".into(),
            license: "Creative Commons CC-BY".into(),
            forecast_boundary: 2026,
        }
    }
}

/// Descriptive provenance. Never used in comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub source: String,
    pub source_url: String,
    pub citation: String,
    pub license: String,
    /// UTC processing date, `YYYY-MM-DD`.
    pub processed_date: String,
    pub filter_criteria: String,
    pub total_satellites: usize,
    /// First year the dashboard treats as forecast rather than history.
    pub forecast_boundary: i32,
}

/// Histogram entry for one mass bin.
///
/// Rounded statistics serialize whole values as integers, as the dashboard's
/// existing snapshots do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BinStat {
    /// Bin label.
    pub bin: String,
    pub count: u64,
    pub total_mass_kg: u64,
    #[serde(serialize_with = "serialize_number")]
    pub total_mass_tonnes: f64,
}

/// Cumulative entry: everything strictly below a bin ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CumulativeStat {
    pub max_mass_kg: u64,
    pub label: String,
    pub count: u64,
    #[serde(serialize_with = "serialize_number")]
    pub mass_tonnes: f64,
    #[serde(serialize_with = "serialize_number")]
    pub pct_count: f64,
    #[serde(serialize_with = "serialize_number")]
    pub pct_mass: f64,
}

/// Aggregate for one `(region, year)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionYearDistribution {
    pub total_count: u64,
    #[serde(serialize_with = "serialize_number")]
    pub total_mass_tonnes: f64,
    pub by_bin: Vec<BinStat>,
    pub cumulative: Vec<CumulativeStat>,
}

/// `region -> year -> distribution`, ordered for deterministic output.
pub type Distributions = BTreeMap<String, BTreeMap<String, RegionYearDistribution>>;

/// The persisted snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutputDocument {
    pub metadata: Metadata,
    /// Distinct launch years present, sorted ascending.
    pub years: Vec<String>,
    pub regions: Vec<DistributionRegion>,
    pub mass_bins: Vec<MassBin>,
    pub distributions: Distributions,
    /// Sorted by year descending, then mass descending.
    pub satellites: Vec<SatelliteRecord>,
}

impl OutputDocument {
    /// Look up the distribution for `region` in `year`.
    #[must_use]
    pub fn distribution(
        &self,
        region: DistributionRegion,
        year: &str,
    ) -> Option<&RegionYearDistribution> {
        self.distributions.get(region.as_str())?.get(year)
    }
}
