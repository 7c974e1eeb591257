//! Bin and cumulative statistics per region and year.
//!
//! Every statistic is recomputed from the record subset it describes; no
//! running totals are carried between bins. Output maps are ordered so two
//! runs over the same records serialize identically.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use satcat_core::bins::MassBin;
use satcat_core::document::{
    Attribution, BinStat, CumulativeStat, Distributions, Metadata, OutputDocument,
    RegionYearDistribution,
};
use satcat_core::enums::DistributionRegion;
use satcat_core::record::SatelliteRecord;
use satcat_core::units::{kg_to_tonnes, percent_of};

/// Years shown in the closing summary by default.
pub const DEFAULT_SUMMARY_YEARS: usize = 5;

/// Inputs to [`aggregate`] besides the records themselves.
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// Contiguous, ascending bins starting at 0 kg.
    pub mass_bins: Vec<MassBin>,
    /// Year filter the records were built with, recorded in the metadata.
    pub min_year: i32,
    pub attribution: Attribution,
    pub processed_date: NaiveDate,
}

impl AggregateOptions {
    /// Human-readable filter description stored in the metadata.
    #[must_use]
    pub fn filter_criteria(&self) -> String {
        format!("LDate >= {}-01-01, Mass > 0", self.min_year)
    }
}

/// Count and summed mass of the masses matching `keep`.
fn tally(masses: &[u64], keep: impl Fn(u64) -> bool) -> (u64, u64) {
    masses
        .iter()
        .copied()
        .filter(|kg| keep(*kg))
        .fold((0, 0), |(count, total), kg| (count + 1, total.saturating_add(kg)))
}

/// Statistics for one region/year subset, given its masses.
#[must_use]
pub fn distribution(masses: &[u64], bins: &[MassBin]) -> RegionYearDistribution {
    let total_count = masses.len() as u64;
    let total_mass = masses.iter().fold(0u64, |total, kg| total.saturating_add(*kg));

    let by_bin = bins
        .iter()
        .map(|bin| {
            let (count, kg) = tally(masses, |m| bin.contains(m));
            BinStat {
                bin: bin.label.clone(),
                count,
                total_mass_kg: kg,
                total_mass_tonnes: kg_to_tonnes(kg),
            }
        })
        .collect();

    let cumulative = bins
        .iter()
        .map(|bin| {
            let (count, kg) = tally(masses, |m| m < bin.max);
            CumulativeStat {
                max_mass_kg: bin.max,
                label: bin.label.clone(),
                count,
                mass_tonnes: kg_to_tonnes(kg),
                pct_count: percent_of(count, total_count),
                pct_mass: percent_of(kg, total_mass),
            }
        })
        .collect();

    RegionYearDistribution {
        total_count,
        total_mass_tonnes: kg_to_tonnes(total_mass),
        by_bin,
        cumulative,
    }
}

/// Build the output document from filtered records.
#[must_use]
pub fn aggregate(mut records: Vec<SatelliteRecord>, options: &AggregateOptions) -> OutputDocument {
    let mut by_year: BTreeMap<i32, Vec<&SatelliteRecord>> = BTreeMap::new();
    for record in &records {
        by_year.entry(record.year).or_default().push(record);
    }
    let years: Vec<String> = by_year
        .keys()
        .map(ToString::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut distributions = Distributions::new();
    for region in DistributionRegion::ALL {
        let per_year = by_year
            .iter()
            .map(|(year, members)| {
                let masses: Vec<u64> = members
                    .iter()
                    .filter(|r| region.includes(r.region))
                    .map(|r| r.mass_kg)
                    .collect();
                (year.to_string(), distribution(&masses, &options.mass_bins))
            })
            .collect();
        distributions.insert(region.as_str().to_string(), per_year);
    }

    let attribution = &options.attribution;
    let metadata = Metadata {
        source: attribution.source.clone(),
        source_url: attribution.source_url.clone(),
        citation: attribution.citation.clone(),
        license: attribution.license.clone(),
        processed_date: options.processed_date.format("%Y-%m-%d").to_string(),
        filter_criteria: options.filter_criteria(),
        total_satellites: records.len(),
        forecast_boundary: attribution.forecast_boundary,
    };

    records.sort_by(|a, b| b.year.cmp(&a.year).then(b.mass_kg.cmp(&a.mass_kg)));

    OutputDocument {
        metadata,
        years,
        regions: DistributionRegion::ALL.to_vec(),
        mass_bins: options.mass_bins.clone(),
        distributions,
        satellites: records,
    }
}

/// One line of the closing yearly breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlySummary {
    pub year: String,
    pub total_count: u64,
    pub total_mass_tonnes: f64,
}

/// Global totals for the last `last` years of `document`, oldest first.
#[must_use]
pub fn yearly_summary(document: &OutputDocument, last: usize) -> Vec<YearlySummary> {
    let skip = document.years.len().saturating_sub(last);
    document.years[skip..]
        .iter()
        .filter_map(|year| {
            let dist = document.distribution(DistributionRegion::Global, year)?;
            Some(YearlySummary {
                year: year.clone(),
                total_count: dist.total_count,
                total_mass_tonnes: dist.total_mass_tonnes,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use satcat_core::bins::default_mass_bins;
    use satcat_core::enums::{OrbitClass, Region};

    fn record(name: &str, year: i32, mass_kg: u64, region: Region) -> SatelliteRecord {
        SatelliteRecord {
            name: name.into(),
            launch_date: format!("{year}-01-01"),
            year,
            mass_kg,
            owner: String::new(),
            state: String::new(),
            region,
            orbit: OrbitClass::Leo,
        }
    }

    fn options() -> AggregateOptions {
        AggregateOptions {
            mass_bins: default_mass_bins(),
            min_year: 2015,
            attribution: Attribution::default(),
            processed_date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
        }
    }

    #[test]
    fn bins_are_half_open() {
        let dist = distribution(&[0, 49, 50, 99, 100], &default_mass_bins());
        assert_eq!(dist.by_bin[0].count, 2);
        assert_eq!(dist.by_bin[1].count, 2);
        assert_eq!(dist.by_bin[2].count, 1);
        assert_eq!(dist.by_bin[1].total_mass_kg, 149);
        assert!((dist.by_bin[1].total_mass_tonnes - 0.1).abs() < 1e-9);
    }

    #[test]
    fn cumulative_is_recomputed_per_ceiling() {
        let dist = distribution(&[10, 60, 400, 1_500], &default_mass_bins());
        let counts: Vec<u64> = dist.cumulative.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![1, 2, 2, 3, 3, 4, 4, 4, 4, 4, 4]);
        assert!((dist.cumulative[1].pct_count - 50.0).abs() < 1e-9);
        // 70 of 1970 kg
        assert!((dist.cumulative[1].pct_mass - 3.6).abs() < 1e-9);
        assert!((dist.cumulative[10].pct_mass - 100.0).abs() < 1e-9);
    }

    #[test]
    fn mass_above_last_ceiling_counts_in_total_only() {
        let dist = distribution(&[200_000, 10], &default_mass_bins());
        assert_eq!(dist.total_count, 2);
        assert_eq!(dist.by_bin.iter().map(|b| b.count).sum::<u64>(), 1);
        assert_eq!(dist.cumulative.last().unwrap().count, 1);
        assert!((dist.cumulative.last().unwrap().pct_count - 50.0).abs() < 1e-9);
        assert!((dist.total_mass_tonnes - 200.0).abs() < 1e-9);
    }

    #[test]
    fn mass_sums_saturate_instead_of_overflowing() {
        let dist = distribution(&[u64::MAX, u64::MAX], &default_mass_bins());
        assert_eq!(dist.total_count, 2);
        assert!(dist.total_mass_tonnes.is_finite());
        assert!(dist.cumulative.iter().all(|c| c.count == 0));
    }

    #[test]
    fn empty_subset_has_zero_percentages() {
        let dist = distribution(&[], &default_mass_bins());
        assert_eq!(dist.total_count, 0);
        assert!(dist.cumulative.iter().all(|c| c.pct_count == 0.0 && c.pct_mass == 0.0));
    }

    #[test]
    fn regions_nest_and_every_year_is_present() {
        let records = vec![
            record("a", 2020, 100, Region::WesternEurope),
            record("b", 2020, 200, Region::WesternAligned),
            record("c", 2020, 300, Region::Other),
            record("d", 2021, 400, Region::Other),
        ];
        let doc = aggregate(records, &options());
        assert_eq!(doc.years, vec!["2020", "2021"]);
        assert_eq!(doc.regions, DistributionRegion::ALL.to_vec());

        let count = |region, year| doc.distribution(region, year).unwrap().total_count;
        assert_eq!(count(DistributionRegion::Global, "2020"), 3);
        assert_eq!(count(DistributionRegion::WesternAligned, "2020"), 2);
        assert_eq!(count(DistributionRegion::WesternEurope, "2020"), 1);
        assert_eq!(count(DistributionRegion::WesternEurope, "2021"), 0);
        assert_eq!(count(DistributionRegion::Global, "2021"), 1);
    }

    #[test]
    fn satellites_sort_by_year_then_mass_descending() {
        let records = vec![
            record("old-light", 2019, 10, Region::Other),
            record("new-light", 2021, 10, Region::Other),
            record("old-heavy", 2019, 900, Region::Other),
            record("new-heavy", 2021, 900, Region::Other),
            record("new-light-2", 2021, 10, Region::Other),
        ];
        let doc = aggregate(records, &options());
        let names: Vec<&str> = doc.satellites.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["new-heavy", "new-light", "new-light-2", "old-heavy", "old-light"]
        );
    }

    #[test]
    fn metadata_comes_from_options() {
        let doc = aggregate(vec![record("a", 2020, 1, Region::Other)], &options());
        assert_eq!(doc.metadata.processed_date, "2026-10-18");
        assert_eq!(doc.metadata.filter_criteria, "LDate >= 2015-01-01, Mass > 0");
        assert_eq!(doc.metadata.total_satellites, 1);
        assert_eq!(doc.metadata.forecast_boundary, 2026);
        assert_eq!(doc.metadata.license, "Creative Commons CC-BY");
    }

    #[test]
    fn no_records_yield_empty_document() {
        let doc = aggregate(Vec::new(), &options());
        assert!(doc.years.is_empty());
        assert!(doc.satellites.is_empty());
        assert_eq!(doc.distributions.len(), 3);
        assert!(doc.distributions.values().all(BTreeMap::is_empty));
    }

    #[test]
    fn yearly_summary_takes_the_latest_years() {
        let records = (2015..=2022)
            .map(|year| record("x", year, 1_000, Region::Other))
            .collect();
        let doc = aggregate(records, &options());
        let summary = yearly_summary(&doc, DEFAULT_SUMMARY_YEARS);
        let years: Vec<&str> = summary.iter().map(|s| s.year.as_str()).collect();
        assert_eq!(years, vec!["2018", "2019", "2020", "2021", "2022"]);
        assert_eq!(summary[0].total_count, 1);
        assert!((summary[0].total_mass_tonnes - 1.0).abs() < 1e-9);

        assert_eq!(yearly_summary(&doc, 20).len(), 8);
    }
}
