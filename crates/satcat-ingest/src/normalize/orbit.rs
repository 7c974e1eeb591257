use satcat_core::enums::OrbitClass;

/// Map a raw operational orbit code to a coarse [`OrbitClass`].
///
/// Rules are checked in order and the first match wins, so `HELIO` is never
/// read as `HEO` and `GTO` wins over `GEO`.
#[must_use]
pub fn classify_orbit(raw: &str) -> OrbitClass {
    let orbit = raw.trim().to_ascii_uppercase();
    if orbit.is_empty() {
        return OrbitClass::Unknown;
    }
    let has = |needles: &[&str]| needles.iter().any(|n| orbit.contains(n));

    if orbit.contains("LLEO") || orbit == "LEO" || orbit.starts_with("LEO/") {
        OrbitClass::Leo
    } else if has(&["SSO", "S/S"]) {
        OrbitClass::Sso
    } else if has(&["GTO"]) {
        OrbitClass::Gto
    } else if has(&["GEO", "GSO"]) {
        OrbitClass::Geo
    } else if has(&["MEO"]) {
        OrbitClass::Meo
    } else if has(&["EEO"]) {
        OrbitClass::Eeo
    } else if orbit.contains("HEO") && !orbit.contains("HELIO") {
        OrbitClass::Heo
    } else if has(&["HELIO", "HCO"]) {
        OrbitClass::Helio
    } else if has(&["MOON", "LUN", "SEL", "CLO", "CISLU", "EML"]) {
        OrbitClass::Lunar
    } else if has(&["MARS", "DEEP", "PLAN", "DSO", "SOI"]) {
        OrbitClass::DeepSpace
    } else {
        OrbitClass::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("LEO", OrbitClass::Leo)]
    #[case("leo", OrbitClass::Leo)]
    #[case("LLEO/I", OrbitClass::Leo)]
    #[case("LEO/S", OrbitClass::Leo)]
    #[case("SSO", OrbitClass::Sso)]
    #[case("LEO-SSO", OrbitClass::Sso)]
    #[case("S/S", OrbitClass::Sso)]
    #[case("GTO", OrbitClass::Gto)]
    #[case("GEO/S", OrbitClass::Geo)]
    #[case("GSO", OrbitClass::Geo)]
    #[case("MEO", OrbitClass::Meo)]
    #[case("EEO", OrbitClass::Eeo)]
    #[case("HEO", OrbitClass::Heo)]
    #[case("HELIO", OrbitClass::Helio)]
    #[case("HCO", OrbitClass::Helio)]
    #[case("CLO", OrbitClass::Lunar)]
    #[case("SEL", OrbitClass::Lunar)]
    #[case("EML2", OrbitClass::Lunar)]
    #[case("MARS", OrbitClass::DeepSpace)]
    #[case("DSO", OrbitClass::DeepSpace)]
    #[case("XYZ", OrbitClass::Other)]
    #[case("LEOX", OrbitClass::Other)]
    #[case("", OrbitClass::Unknown)]
    #[case("   ", OrbitClass::Unknown)]
    fn classifies_orbits(#[case] raw: &str, #[case] expected: OrbitClass) {
        assert_eq!(classify_orbit(raw), expected);
    }
}
