//! Rounding helpers shared by the aggregator and the market analysis.
//!
//! Both round to one decimal through integer scaling so the numbers match
//! the dashboard's existing snapshots exactly.

use serde::Serializer;

/// Magnitude below which every whole `f64` converts to `i64` exactly.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Kilograms to tonnes, rounded to one decimal: `round(kg / 100) / 10`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn kg_to_tonnes(kg: u64) -> f64 {
    (kg as f64 / 100.0).round() / 10.0
}

/// Percentage of `part` in `total`, rounded to one decimal. Zero when
/// `total` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percent_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 1000.0).round() / 10.0
}

/// Serialize a rounded statistic with whole values written as integers
/// (`100`, not `100.0`), matching the numbers in existing snapshots.
///
/// # Errors
///
/// Propagates the serializer's error.
#[allow(
    clippy::trivially_copy_pass_by_ref,
    clippy::float_cmp,
    clippy::cast_possible_truncation
)]
pub fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < EXACT_INTEGER_LIMIT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tonnes_round_to_one_decimal() {
        assert!((kg_to_tonnes(1234) - 1.2).abs() < f64::EPSILON);
        assert!((kg_to_tonnes(1250) - 1.3).abs() < f64::EPSILON);
        assert!((kg_to_tonnes(49) - 0.0).abs() < f64::EPSILON);
        assert!((kg_to_tonnes(50) - 0.1).abs() < f64::EPSILON);
        assert!((kg_to_tonnes(0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percent_guards_zero_total() {
        assert!((percent_of(0, 0) - 0.0).abs() < f64::EPSILON);
        assert!((percent_of(5, 0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn whole_numbers_serialize_as_integers() {
        let render = |value: f64| {
            let mut out = Vec::new();
            serialize_number(&value, &mut serde_json::Serializer::new(&mut out)).unwrap();
            String::from_utf8(out).unwrap()
        };
        assert_eq!(render(100.0), "100");
        assert_eq!(render(0.0), "0");
        assert_eq!(render(-0.0), "0");
        assert_eq!(render(12.3), "12.3");
        assert_eq!(render(1e300), "1e300");
    }

    #[test]
    fn percent_rounds_to_one_decimal() {
        assert!((percent_of(1, 3) - 33.3).abs() < 1e-9);
        assert!((percent_of(2, 3) - 66.7).abs() < 1e-9);
        assert!((percent_of(3, 3) - 100.0).abs() < 1e-9);
    }
}
