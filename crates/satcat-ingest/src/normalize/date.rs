use std::sync::OnceLock;

use regex::Regex;

/// A launch date reduced to day precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchDate {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub year: i32,
}

fn date_re() -> &'static Regex {
    static DATE_RE: OnceLock<Regex> = OnceLock::new();
    DATE_RE.get_or_init(|| {
        Regex::new(r"([0-9]{4})\s+([A-Za-z0-9_]+)\s+([0-9]{1,2})").expect("valid launch date regex")
    })
}

fn month_number(abbrev: &str) -> Option<&'static str> {
    let month = match abbrev {
        "Jan" => "01",
        "Feb" => "02",
        "Mar" => "03",
        "Apr" => "04",
        "May" => "05",
        "Jun" => "06",
        "Jul" => "07",
        "Aug" => "08",
        "Sep" => "09",
        "Oct" => "10",
        "Nov" => "11",
        "Dec" => "12",
        _ => return None,
    };
    Some(month)
}

/// Parse a catalog date such as `2023 Jan 15` or `2023 Jan  3 12:30`.
///
/// Anything after the day is ignored. Month abbreviations are matched case
/// sensitively; an unknown month, an empty cell or `-` yields `None`.
#[must_use]
pub fn parse_date(raw: &str) -> Option<LaunchDate> {
    if raw.is_empty() || raw == "-" {
        return None;
    }
    let caps = date_re().captures(raw)?;
    let year = &caps[1];
    let month = month_number(&caps[2])?;
    let day = &caps[3];

    Some(LaunchDate {
        date: format!("{year}-{month}-{day:0>2}"),
        year: year.parse().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("2023 Jan 15", "2023-01-15", 2023)]
    #[case("2023 Jan  3", "2023-01-03", 2023)]
    #[case("2023 Jan 15 12:30", "2023-01-15", 2023)]
    #[case("2019 Dec 31 2359:59", "2019-12-31", 2019)]
    #[case("2020 Mar  5?", "2020-03-05", 2020)]
    #[case("  2015 Sep 9", "2015-09-09", 2015)]
    fn parses_catalog_dates(#[case] raw: &str, #[case] date: &str, #[case] year: i32) {
        let parsed = parse_date(raw).expect("date should parse");
        assert_eq!(parsed.date, date);
        assert_eq!(parsed.year, year);
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case("not a date")]
    #[case("2023 January 15")]
    #[case("2023 jan 15")]
    #[case("2023 Jan")]
    #[case("2023")]
    fn rejects_unusable_dates(#[case] raw: &str) {
        assert_eq!(parse_date(raw), None);
    }
}
