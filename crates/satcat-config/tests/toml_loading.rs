//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use satcat_config::{ConfigError, SatcatConfig};

#[test]
fn loads_source_and_filter_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[source]
url = "https://mirror.example.org/satcat.tsv"
max_redirects = 2
timeout_secs = 30

[filter]
min_year = 2020

[output]
path = "out/sizing.json"
"#,
        )?;

        let config: SatcatConfig = Figment::from(Serialized::defaults(SatcatConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.source.url, "https://mirror.example.org/satcat.tsv");
        assert_eq!(config.source.max_redirects, 2);
        assert_eq!(config.source.timeout_secs, 30);
        assert_eq!(config.filter.min_year, 2020);
        assert_eq!(config.output.path.to_str(), Some("out/sizing.json"));
        // Untouched sections keep their defaults.
        assert_eq!(config.metadata.forecast_boundary, 2026);
        assert_eq!(config.mass_bins.len(), 11);
        Ok(())
    });
}

#[test]
fn loads_custom_mass_bins_and_regions() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[regions]
western_europe = ["F", "D"]
excluded = ["PRC"]

[[mass_bins]]
min = 0
max = 500
label = "small"

[[mass_bins]]
min = 500
max = 150000
label = "large"
"#,
        )?;

        let config: SatcatConfig = Figment::from(Serialized::defaults(SatcatConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.regions.western_europe, vec!["F", "D"]);
        assert_eq!(config.regions.excluded, vec!["PRC"]);
        assert_eq!(config.mass_bins.len(), 2);
        assert_eq!(config.mass_bins[1].label, "large");
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".satcat")).expect("create .satcat");
        jail.create_file(
            ".satcat/config.toml",
            r#"
[filter]
min_year = 2018
"#,
        )?;

        let config = SatcatConfig::load().expect("config loads");
        assert_eq!(config.filter.min_year, 2018);
        Ok(())
    });
}

#[test]
fn load_rejects_gapped_bins() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".satcat")).expect("create .satcat");
        jail.create_file(
            ".satcat/config.toml",
            r#"
[[mass_bins]]
min = 0
max = 100
label = "a"

[[mass_bins]]
min = 200
max = 300
label = "b"
"#,
        )?;

        let err = SatcatConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}
