//! Catalog source configuration.

use serde::{Deserialize, Serialize};

/// Tab-separated GCAT satellite catalog.
pub const DEFAULT_SOURCE_URL: &str = "https://planet4589.org/space/gcat/tsv/cat/satcat.tsv";

const fn default_max_redirects() -> u32 {
    5
}

const fn default_timeout_secs() -> u64 {
    120
}

fn default_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("satcat/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// URL of the tab-separated catalog.
    #[serde(default = "default_url")]
    pub url: String,

    /// Maximum number of 301/302 hops before the fetch fails.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: u32,

    /// Whole-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_redirects: default_max_redirects(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}
