//! Attribution written into the document metadata.

use satcat_core::document::Attribution;
use serde::{Deserialize, Serialize};

fn default_source() -> String {
    Attribution::default().source
}

fn default_source_url() -> String {
    Attribution::default().source_url
}

fn default_citation() -> String {
    Attribution::default().citation
}

fn default_license() -> String {
    Attribution::default().license
}

fn default_forecast_boundary() -> i32 {
    Attribution::default().forecast_boundary
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetadataConfig {
    #[serde(default = "default_source")]
    pub source: String,

    #[serde(default = "default_source_url")]
    pub source_url: String,

    #[serde(default = "default_citation")]
    pub citation: String,

    #[serde(default = "default_license")]
    pub license: String,

    /// First year the dashboard renders as forecast.
    #[serde(default = "default_forecast_boundary")]
    pub forecast_boundary: i32,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            source_url: default_source_url(),
            citation: default_citation(),
            license: default_license(),
            forecast_boundary: default_forecast_boundary(),
        }
    }
}

impl MetadataConfig {
    #[must_use]
    pub fn attribution(&self) -> Attribution {
        Attribution {
            source: self.source.clone(),
            source_url: self.source_url.clone(),
            citation: self.citation.clone(),
            license: self.license.clone(),
            forecast_boundary: self.forecast_boundary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_core_attribution() {
        assert_eq!(MetadataConfig::default().attribution(), Attribution::default());
    }
}
