use std::collections::HashSet;
use std::sync::OnceLock;

use satcat_core::enums::Region;
use satcat_core::regions::{EXCLUDED_STATES, WESTERN_EUROPE_STATES};

/// State-code tables used to assign a [`Region`].
///
/// Codes are stored trimmed and uppercased. The Western Europe table is
/// consulted first, then the excluded table; any other code, blank
/// included, is Western-aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTables {
    western_europe: HashSet<String>,
    excluded: HashSet<String>,
}

fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

impl RegionTables {
    pub fn from_lists<I, J, S, T>(western_europe: I, excluded: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Self {
            western_europe: western_europe
                .into_iter()
                .map(|c| normalize_code(c.as_ref()))
                .collect(),
            excluded: excluded
                .into_iter()
                .map(|c| normalize_code(c.as_ref()))
                .collect(),
        }
    }

    #[must_use]
    pub fn classify(&self, code: &str) -> Region {
        let code = normalize_code(code);
        if self.western_europe.contains(&code) {
            Region::WesternEurope
        } else if self.excluded.contains(&code) {
            Region::Other
        } else {
            Region::WesternAligned
        }
    }

    /// Codes present in both tables, sorted. Such codes classify as
    /// Western Europe.
    #[must_use]
    pub fn overlapping_codes(&self) -> Vec<String> {
        let mut overlap: Vec<String> = self
            .western_europe
            .intersection(&self.excluded)
            .cloned()
            .collect();
        overlap.sort();
        overlap
    }
}

impl Default for RegionTables {
    fn default() -> Self {
        Self::from_lists(WESTERN_EUROPE_STATES, EXCLUDED_STATES)
    }
}

/// Classify `code` against the built-in tables.
#[must_use]
pub fn classify_region(code: &str) -> Region {
    static DEFAULT_TABLES: OnceLock<RegionTables> = OnceLock::new();
    DEFAULT_TABLES
        .get_or_init(RegionTables::default)
        .classify(code)
}
