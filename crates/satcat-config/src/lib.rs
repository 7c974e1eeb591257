//! # satcat-config
//!
//! Layered configuration loading for satcat using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SATCAT_*` prefix, `__` as separator)
//! 2. Project-level `.satcat/config.toml`
//! 3. User-level `~/.config/satcat/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SATCAT_SOURCE__URL` -> `source.url`, `SATCAT_FILTER__MIN_YEAR`
//! -> `filter.min_year`, etc. The `__` (double underscore) separates nested
//! config sections.
//!
//! # Usage
//!
//! ```no_run
//! use satcat_config::SatcatConfig;
//!
//! let config = SatcatConfig::load().expect("config");
//! println!("fetching {} (min year {})", config.source.url, config.filter.min_year);
//! ```

mod error;
mod filter;
mod metadata;
mod output;
mod regions;
mod source;

pub use error::ConfigError;
pub use filter::FilterConfig;
pub use metadata::MetadataConfig;
pub use output::OutputConfig;
pub use regions::RegionsConfig;
pub use source::{DEFAULT_SOURCE_URL, SourceConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use satcat_core::bins::{MassBin, default_mass_bins, validate_bins};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SatcatConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub regions: RegionsConfig,
    #[serde(default = "default_mass_bins")]
    pub mass_bins: Vec<MassBin>,
}

impl Default for SatcatConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            filter: FilterConfig::default(),
            output: OutputConfig::default(),
            metadata: MetadataConfig::default(),
            regions: RegionsConfig::default(),
            mass_bins: default_mass_bins(),
        }
    }
}

impl SatcatConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does not read `.env` files; the binary loads those into the process
    /// environment before calling this.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] if the merged values are inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".satcat/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("SATCAT_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty source URL, a zero
    /// timeout, or a mass-bin table with gaps or overlaps.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "source.url".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.source.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "source.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        validate_bins(&self.mass_bins).map_err(|e| ConfigError::InvalidValue {
            field: "mass_bins".into(),
            reason: e.to_string(),
        })
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("satcat").join("config.toml"))
    }
}
