//! Addressable-market figures for one launcher capacity.
//!
//! Tonnes and percentages here are unrounded; presentation rounds them.

use satcat_core::bins::MassBin;
use satcat_core::document::OutputDocument;
use satcat_core::record::SatelliteRecord;
use serde::Serialize;

use crate::error::MarketError;
use crate::query::MarketQuery;

/// Headline figures for a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub addressable_mass_tonnes: f64,
    pub satellite_count: usize,
    pub total_mass_tonnes: f64,
    pub total_count: usize,
    /// Share of period mass the launcher can carry, in percent.
    pub pct_mass: f64,
    /// Share of period satellites the launcher can carry, in percent.
    pub pct_count: f64,
    /// Addressable mass times price, in millions of EUR.
    pub addressable_revenue_meur: f64,
}

/// One histogram bar over the period set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBin {
    pub label: String,
    pub min: u64,
    pub max: u64,
    pub count: usize,
    pub mass_tonnes: f64,
    /// The whole bin fits under the capacity.
    pub addressable: bool,
    /// The capacity falls strictly inside the bin.
    pub partially_addressable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizingReport {
    pub query: MarketQuery,
    pub kpis: Kpis,
    pub histogram: Vec<HistogramBin>,
    /// Index of the bar where the capacity marker is drawn: the first bin
    /// whose ceiling exceeds the capacity, else the last bin. `None` only
    /// when the snapshot has no bins.
    pub reference_bin: Option<usize>,
    /// Matching satellites at or under the capacity, heaviest first.
    pub addressable: Vec<SatelliteRecord>,
}

#[allow(clippy::cast_precision_loss)]
fn tonnes(kg: u64) -> f64 {
    kg as f64 / 1000.0
}

fn percent(part: f64, total: f64) -> f64 {
    if total > 0.0 { part / total * 100.0 } else { 0.0 }
}

/// Summed mass. Saturates, since snapshots loaded from disk are unchecked.
fn total_mass<'a>(records: impl IntoIterator<Item = &'a SatelliteRecord>) -> u64 {
    records
        .into_iter()
        .fold(0u64, |total, r| total.saturating_add(r.mass_kg))
}

fn histogram(
    period_set: &[&SatelliteRecord],
    bins: &[MassBin],
    capacity_kg: u64,
) -> Vec<HistogramBin> {
    bins.iter()
        .map(|bin| {
            let in_bin: Vec<&SatelliteRecord> = period_set
                .iter()
                .copied()
                .filter(|r| bin.contains(r.mass_kg))
                .collect();
            HistogramBin {
                label: bin.label.clone(),
                min: bin.min,
                max: bin.max,
                count: in_bin.len(),
                mass_tonnes: tonnes(total_mass(in_bin.iter().copied())),
                addressable: bin.max <= capacity_kg,
                partially_addressable: bin.min < capacity_kg && bin.max > capacity_kg,
            }
        })
        .collect()
}

/// Index of the first bin whose ceiling exceeds `capacity_kg`, else the last.
#[must_use]
pub fn reference_bin(bins: &[MassBin], capacity_kg: u64) -> Option<usize> {
    bins.iter()
        .position(|bin| bin.max > capacity_kg)
        .or_else(|| bins.len().checked_sub(1))
}

/// Size the addressable market for `query` over `document`.
///
/// # Errors
///
/// Returns [`MarketError::InvalidQuery`] if the query fails validation.
#[allow(clippy::cast_precision_loss)]
pub fn size(document: &OutputDocument, query: &MarketQuery) -> Result<SizingReport, MarketError> {
    query.validate()?;

    let period_set: Vec<&SatelliteRecord> = document
        .satellites
        .iter()
        .filter(|r| query.selects(r))
        .collect();
    let mut addressable: Vec<SatelliteRecord> = period_set
        .iter()
        .filter(|r| r.mass_kg <= query.capacity_kg)
        .map(|r| (*r).clone())
        .collect();
    addressable.sort_by(|a, b| b.mass_kg.cmp(&a.mass_kg));

    let addressable_kg = total_mass(&addressable);
    let total_kg = total_mass(period_set.iter().copied());
    let addressable_mass_tonnes = tonnes(addressable_kg);
    let total_mass_tonnes = tonnes(total_kg);

    let kpis = Kpis {
        addressable_mass_tonnes,
        satellite_count: addressable.len(),
        total_mass_tonnes,
        total_count: period_set.len(),
        pct_mass: percent(addressable_mass_tonnes, total_mass_tonnes),
        pct_count: percent(addressable.len() as f64, period_set.len() as f64),
        addressable_revenue_meur: addressable_kg as f64 * query.price_per_kg_eur / 1_000_000.0,
    };
    tracing::debug!(
        period = %query.period,
        region = %query.region,
        capacity_kg = query.capacity_kg,
        addressable = kpis.satellite_count,
        total = kpis.total_count,
        "sized addressable market"
    );

    Ok(SizingReport {
        query: query.clone(),
        kpis,
        histogram: histogram(&period_set, &document.mass_bins, query.capacity_kg),
        reference_bin: reference_bin(&document.mass_bins, query.capacity_kg),
        addressable,
    })
}
