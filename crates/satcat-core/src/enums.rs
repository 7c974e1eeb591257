//! Classification tags for satellites and distribution regions.
//!
//! All tags serialize to the exact display strings the dashboard reads
//! (`"Western Europe"`, `"Deep Space"`, ...), so renaming a variant never
//! changes the output document.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// Geopolitical bucket derived once from a record's state code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum Region {
    #[serde(rename = "Western Europe")]
    WesternEurope,
    #[serde(rename = "Western-aligned")]
    WesternAligned,
    #[serde(rename = "Other")]
    Other,
}

impl Region {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WesternEurope => "Western Europe",
            Self::WesternAligned => "Western-aligned",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OrbitClass
// ---------------------------------------------------------------------------

/// Orbit family derived from the free-text operational orbit column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum OrbitClass {
    #[serde(rename = "LEO")]
    Leo,
    #[serde(rename = "SSO")]
    Sso,
    #[serde(rename = "GTO")]
    Gto,
    #[serde(rename = "GEO")]
    Geo,
    #[serde(rename = "MEO")]
    Meo,
    #[serde(rename = "EEO")]
    Eeo,
    #[serde(rename = "HEO")]
    Heo,
    Helio,
    Lunar,
    #[serde(rename = "Deep Space")]
    DeepSpace,
    Other,
    Unknown,
}

impl OrbitClass {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Leo => "LEO",
            Self::Sso => "SSO",
            Self::Gto => "GTO",
            Self::Geo => "GEO",
            Self::Meo => "MEO",
            Self::Eeo => "EEO",
            Self::Heo => "HEO",
            Self::Helio => "Helio",
            Self::Lunar => "Lunar",
            Self::DeepSpace => "Deep Space",
            Self::Other => "Other",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for OrbitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DistributionRegion
// ---------------------------------------------------------------------------

/// Region selector used to key the aggregated distributions.
///
/// Unlike [`Region`], these overlap:
///
/// ```text
/// Global ⊇ Western-aligned ⊇ Western Europe
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum DistributionRegion {
    Global,
    #[serde(rename = "Western Europe")]
    WesternEurope,
    #[serde(rename = "Western-aligned")]
    WesternAligned,
}

impl DistributionRegion {
    /// All selectors in output order.
    pub const ALL: [Self; 3] = [Self::Global, Self::WesternEurope, Self::WesternAligned];

    /// Whether a record classified as `region` belongs to this selector.
    #[must_use]
    pub const fn includes(self, region: Region) -> bool {
        match self {
            Self::Global => true,
            Self::WesternEurope => matches!(region, Region::WesternEurope),
            Self::WesternAligned => {
                matches!(region, Region::WesternEurope | Region::WesternAligned)
            }
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::WesternEurope => "Western Europe",
            Self::WesternAligned => "Western-aligned",
        }
    }
}

impl fmt::Display for DistributionRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistributionRegion {
    type Err = CoreError;

    /// Accepts display names and their kebab-case forms, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(' ', "-");
        match normalized.as_str() {
            "global" => Ok(Self::Global),
            "western-europe" | "europe" => Ok(Self::WesternEurope),
            "western-aligned" | "western" => Ok(Self::WesternAligned),
            _ => Err(CoreError::Validation(format!(
                "unknown region `{}`; expected one of: Global, Western Europe, Western-aligned",
                s.trim()
            ))),
        }
    }
}
