use std::sync::OnceLock;

use regex::Regex;

fn leading_float_re() -> &'static Regex {
    static FLOAT_RE: OnceLock<Regex> = OnceLock::new();
    FLOAT_RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
            .expect("valid leading float regex")
    })
}

/// Parse a catalog mass in kilograms.
///
/// Uncertainty markers (`?`, `~`, `>`, `<`) are dropped wherever they
/// appear, then the longest leading number is read, so `"306?"`, `"~1500"`
/// and `"12.5 kg"` all parse. Empty, `-`, non-numeric, non-finite and
/// non-positive values yield `None`.
#[must_use]
pub fn parse_mass(raw: &str) -> Option<f64> {
    if raw.is_empty() || raw == "-" {
        return None;
    }
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '?' | '~' | '>' | '<'))
        .collect();
    let literal = leading_float_re().find(cleaned.trim())?.as_str();
    let mass: f64 = literal.parse().ok()?;

    (mass.is_finite() && mass > 0.0).then_some(mass)
}
