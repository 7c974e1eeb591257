//! Serde roundtrip and JsonSchema validation for the output document.

use std::collections::BTreeMap;

use schemars::schema_for;
use satcat_core::bins::default_mass_bins;
use satcat_core::document::*;
use satcat_core::enums::{DistributionRegion, OrbitClass, Region};
use satcat_core::record::SatelliteRecord;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn sample_document() -> OutputDocument {
    let distribution = RegionYearDistribution {
        total_count: 1,
        total_mass_tonnes: 0.1,
        by_bin: vec![BinStat {
            bin: "100-300 kg".into(),
            count: 1,
            total_mass_kg: 100,
            total_mass_tonnes: 0.1,
        }],
        cumulative: vec![CumulativeStat {
            max_mass_kg: 300,
            label: "100-300 kg".into(),
            count: 1,
            mass_tonnes: 0.1,
            pct_count: 100.0,
            pct_mass: 100.0,
        }],
    };

    let mut distributions = BTreeMap::new();
    for region in DistributionRegion::ALL {
        let mut by_year = BTreeMap::new();
        by_year.insert("2020".to_string(), distribution.clone());
        distributions.insert(region.as_str().to_string(), by_year);
    }

    OutputDocument {
        metadata: Metadata {
            source: "GCAT (General Catalog of Artificial Space Objects)".into(),
            source_url: "https://planet4589.org/space/gcat/".into(),
            citation: "data from GCAT (J. McDowell, planet4589.org/space/gcat)".into(),
            license: "Creative Commons CC-BY".into(),
            processed_date: "2026-01-01".into(),
            filter_criteria: "LDate >= 2015-01-01, Mass > 0".into(),
            total_satellites: 1,
            forecast_boundary: 2026,
        },
        years: vec!["2020".into()],
        regions: DistributionRegion::ALL.to_vec(),
        mass_bins: default_mass_bins(),
        distributions,
        satellites: vec![SatelliteRecord {
            name: "SatA".into(),
            launch_date: "2020-03-05".into(),
            year: 2020,
            mass_kg: 100,
            owner: "CNES".into(),
            state: "F".into(),
            region: Region::WesternEurope,
            orbit: OrbitClass::Sso,
        }],
    }
}

#[test]
fn document_roundtrip() {
    let doc = sample_document();
    let json = serde_json::to_string_pretty(&doc).unwrap();
    let recovered: OutputDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, doc);
}

#[test]
fn document_matches_its_schema() {
    let schema = serde_json::to_value(schema_for!(OutputDocument)).unwrap();
    let instance = serde_json::to_value(sample_document()).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn document_uses_dashboard_key_names() {
    let value = serde_json::to_value(sample_document()).unwrap();
    for key in ["metadata", "years", "regions", "massBins", "distributions", "satellites"] {
        assert!(value.get(key).is_some(), "missing top-level key {key}");
    }

    let sat = &value["satellites"][0];
    assert_eq!(sat["launchDate"], "2020-03-05");
    assert_eq!(sat["massKg"], 100);
    assert_eq!(sat["region"], "Western Europe");
    assert_eq!(sat["orbit"], "SSO");

    let dist = &value["distributions"]["Western-aligned"]["2020"];
    assert_eq!(dist["totalCount"], 1);
    assert_eq!(dist["byBin"][0]["totalMassKg"], 100);
    assert_eq!(dist["cumulative"][0]["maxMassKg"], 300);
    assert_eq!(dist["cumulative"][0]["pctCount"], 100);

    assert_eq!(value["metadata"]["processedDate"], "2026-01-01");
    assert_eq!(value["regions"][1], "Western Europe");
}

#[test]
fn whole_statistics_are_written_without_a_fraction() {
    let json = serde_json::to_string(&sample_document()).unwrap();
    assert!(json.contains(r#""pctCount":100,"pctMass":100}"#), "{json}");
    assert!(json.contains(r#""totalMassTonnes":0.1"#), "{json}");
    assert!(!json.contains("100.0"), "{json}");
}

#[test]
fn distribution_lookup_by_region_and_year() {
    let doc = sample_document();
    assert!(doc.distribution(DistributionRegion::Global, "2020").is_some());
    assert!(doc.distribution(DistributionRegion::Global, "2019").is_none());
}
