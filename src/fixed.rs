//! Fixed-point rendering.
//!
//! Every display path funnels through these helpers so the crate rounds
//! the same way everywhere: half away from zero, at the caller's
//! precision, with plain decimal output at any magnitude.

/// Largest double that still behaves as an exact integer (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Render a non-negative finite value with exactly `decimals` fraction
/// digits, rounding half away from zero.
///
/// Values too large for exact integer rounding fall back to the standard
/// formatter, which also never emits exponential notation once an
/// explicit precision is given.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    debug_assert!(value.is_finite() && value >= 0.0);

    let Some(scale) = pow10_u64(decimals) else {
        return format!("{value:.decimals$}");
    };

    #[allow(clippy::cast_precision_loss)] // scale <= 10^19; error is far below rounding granularity
    let scaled = value * scale as f64;
    if scaled >= MAX_EXACT_INTEGER {
        return format!("{value:.decimals$}");
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // scaled is in [0, 2^53)
    let units = scaled.round() as u64;
    let whole = units / scale;
    let frac = units % scale;

    if decimals == 0 {
        whole.to_string()
    } else {
        format!("{whole}.{frac:0decimals$}")
    }
}

/// Render like [`to_fixed`], then insert comma thousands separators into
/// the integer part.
pub fn to_fixed_grouped(value: f64, decimals: usize) -> String {
    let rendered = to_fixed(value, decimals);
    match rendered.split_once('.') {
        Some((whole, frac)) => format!("{}.{frac}", group_digits(whole)),
        None => group_digits(&rendered),
    }
}

/// Insert comma separators into a plain run of ASCII digits.
fn group_digits(digits: &str) -> String {
    let bytes: Vec<_> = digits.bytes().rev().collect();
    let chunks: Vec<_> = bytes
        .chunks(3)
        .map(|chunk| chunk.iter().rev().map(|&b| b as char).collect::<String>())
        .collect();
    chunks.into_iter().rev().collect::<Vec<_>>().join(",")
}

/// 10^`exp` as an integer, or `None` past the `u64` range (`exp` > 19).
fn pow10_u64(exp: usize) -> Option<u64> {
    u32::try_from(exp).ok().and_then(|exp| 10u64.checked_pow(exp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(to_fixed(1234.5, 0), "1235");
        assert_eq!(to_fixed(1232.5, 0), "1233");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.125, 2), "0.13");
    }

    #[test]
    fn pads_fraction_digits() {
        assert_eq!(to_fixed(1.2, 3), "1.200");
        assert_eq!(to_fixed(0.05, 2), "0.05");
        assert_eq!(to_fixed(3.0, 2), "3.00");
    }

    #[test]
    fn zero_decimals_renders_an_integer() {
        assert_eq!(to_fixed(999.4, 0), "999");
        assert_eq!(to_fixed(999.5, 0), "1000");
        assert_eq!(to_fixed(0.0, 0), "0");
    }

    #[test]
    fn carries_across_the_decimal_point() {
        assert_eq!(to_fixed(0.999, 2), "1.00");
        assert_eq!(to_fixed(999.999, 2), "1000.00");
    }

    #[test]
    fn huge_values_stay_decimal() {
        let rendered = to_fixed(1e280, 2);
        assert!(!rendered.contains('e') && !rendered.contains('E'));
        assert!(rendered.ends_with(".00"));
        assert!(rendered.len() > 280);
    }

    #[test]
    fn absurd_precision_falls_back_to_std() {
        let rendered = to_fixed(0.5, 25);
        assert_eq!(rendered, format!("{:.25}", 0.5_f64));
        assert!(!rendered.contains('e'));
    }

    #[test]
    fn groups_integer_digits() {
        assert_eq!(to_fixed_grouped(1234.5, 2), "1,234.50");
        assert_eq!(to_fixed_grouped(999.0, 2), "999.00");
        assert_eq!(to_fixed_grouped(1_000_000.0, 0), "1,000,000");
        assert_eq!(to_fixed_grouped(48_234.0, 0), "48,234");
    }

    #[test]
    fn grouping_leaves_the_fraction_alone() {
        assert_eq!(to_fixed_grouped(12_345.678_9, 4), "12,345.6789");
    }
}
