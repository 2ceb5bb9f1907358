//! Dashboard display formatting.
//!
//! The public operations: compact magnitude notation, currency, weight,
//! unit quantities, and percentages. All of them are total over `f64`
//! and never raise; degenerate inputs render as the zero literal of
//! their family (`"0"`, `"$0"`, `"0 tons"`, …).

use crate::fixed::{to_fixed, to_fixed_grouped};
use crate::scale::scale_value;

/// Fraction digits compact notation uses when callers have no opinion.
pub const DEFAULT_COMPACT_DECIMALS: usize = 2;
/// Fraction digits for sub-threshold currency amounts.
pub const DEFAULT_CURRENCY_DECIMALS: usize = 2;
/// Fraction digits for sub-threshold weights.
pub const DEFAULT_WEIGHT_DECIMALS: usize = 1;
/// Fraction digits for sub-threshold quantities.
pub const DEFAULT_QUANTITY_DECIMALS: usize = 0;

/// Magnitude at or above which currency, weight, and quantity formatting
/// switch to compact notation.
pub const COMPACT_THRESHOLD: f64 = 1e6;

/// Format a number in compact magnitude notation: `1.23M`, `48.2K`,
/// `-1.93B`. Values below the thousand tier render unscaled with the
/// same number of fraction digits.
#[must_use]
pub fn format_compact_number(value: f64, decimals: usize) -> String {
    scale_value(value, decimals).to_string()
}

/// Format a dollar amount.
///
/// Below [`COMPACT_THRESHOLD`] the amount renders as a comma-grouped
/// fixed-point number with `decimals` fraction digits; at or above it,
/// in compact notation with `compact_decimals`. The sign sits outside
/// the currency symbol.
///
/// # Examples
///
/// ```
/// use herdfmt::format_currency;
///
/// assert_eq!(format_currency(1234.5, 2, 2), "$1,234.50");
/// assert_eq!(format_currency(1_930_000.0, 2, 2), "$1.93M");
/// assert_eq!(format_currency(-1_930_000.0, 2, 2), "-$1.93M");
/// assert_eq!(format_currency(f64::NAN, 2, 2), "$0");
/// ```
#[must_use]
pub fn format_currency(value: f64, decimals: usize, compact_decimals: usize) -> String {
    if degenerate(value) {
        return "$0".to_owned();
    }
    let sign = sign_prefix(value);
    let abs = value.abs();
    if abs >= COMPACT_THRESHOLD {
        let scaled = scale_value(abs, compact_decimals);
        format!("{sign}${scaled}")
    } else {
        format!("{sign}${}", to_fixed_grouped(abs, decimals))
    }
}

/// Format a weight in tons.
///
/// Sub-threshold weights render ungrouped with `decimals` fraction
/// digits; at or above [`COMPACT_THRESHOLD`] the number part switches to
/// compact notation with `compact_decimals`.
#[must_use]
pub fn format_weight(value: f64, decimals: usize, compact_decimals: usize) -> String {
    if degenerate(value) {
        return "0 tons".to_owned();
    }
    let sign = sign_prefix(value);
    let abs = value.abs();
    if abs >= COMPACT_THRESHOLD {
        let scaled = scale_value(abs, compact_decimals);
        format!("{sign}{scaled} tons")
    } else {
        format!("{sign}{} tons", to_fixed(abs, decimals))
    }
}

/// Format a count with its unit label, e.g. `1,235 lbs` or `1.93B ml`.
///
/// Sub-threshold quantities render comma-grouped with `decimals`
/// fraction digits (zero gives a plain grouped integer); at or above
/// [`COMPACT_THRESHOLD`] the number part switches to compact notation
/// with `compact_decimals`.
#[must_use]
pub fn format_quantity(value: f64, unit: &str, decimals: usize, compact_decimals: usize) -> String {
    if degenerate(value) {
        return format!("0 {unit}");
    }
    let sign = sign_prefix(value);
    let abs = value.abs();
    if abs >= COMPACT_THRESHOLD {
        let scaled = scale_value(abs, compact_decimals);
        format!("{sign}{scaled} {unit}")
    } else {
        format!("{sign}{} {unit}", to_fixed_grouped(abs, decimals))
    }
}

/// Format a percentage with `decimals` fraction digits: `92%`, `-3.3%`.
/// Percentages render ungrouped and never switch to compact notation.
#[must_use]
pub fn format_percent(value: f64, decimals: usize) -> String {
    if degenerate(value) {
        return "0%".to_owned();
    }
    format!("{}{}%", sign_prefix(value), to_fixed(value.abs(), decimals))
}

/// Shared zero / non-finite screen for the affixed formatters.
fn degenerate(value: f64) -> bool {
    if !value.is_finite() {
        tracing::debug!(value, "Non-finite value normalized to zero literal");
        return true;
    }
    value == 0.0
}

fn sign_prefix(value: f64) -> &'static str {
    if value < 0.0 { "-" } else { "" }
}
