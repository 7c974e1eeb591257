//! Record filter configuration.

use serde::{Deserialize, Serialize};

const fn default_min_year() -> i32 {
    2015
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    /// Records launched before this year are dropped.
    #[serde(default = "default_min_year")]
    pub min_year: i32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_year: default_min_year(),
        }
    }
}
