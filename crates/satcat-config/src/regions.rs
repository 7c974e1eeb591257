//! State-code tables for the region classifier.

use satcat_core::regions::{EXCLUDED_STATES, WESTERN_EUROPE_STATES};
use serde::{Deserialize, Serialize};

fn default_western_europe() -> Vec<String> {
    WESTERN_EUROPE_STATES.iter().map(ToString::to_string).collect()
}

fn default_excluded() -> Vec<String> {
    EXCLUDED_STATES.iter().map(ToString::to_string).collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegionsConfig {
    /// Codes classified as Western Europe. Checked first.
    #[serde(default = "default_western_europe")]
    pub western_europe: Vec<String>,

    /// Codes excluded from the Western-aligned bucket.
    #[serde(default = "default_excluded")]
    pub excluded: Vec<String>,
}

impl Default for RegionsConfig {
    fn default() -> Self {
        Self {
            western_europe: default_western_europe(),
            excluded: default_excluded(),
        }
    }
}
