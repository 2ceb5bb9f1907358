//! The shared magnitude scaler.
//!
//! Decomposes a value into a sign, a fixed-point mantissa, and a suffix
//! from the tier table. Every compact display form is produced here; the
//! formatters in [`crate::format`] only add their unit affixes around
//! the decomposition.

use std::fmt;

use crate::fixed::to_fixed;
use crate::tiers::{MIN_TIER_EXPONENT, TIERS, Tier};

/// Magnitudes below this collapse to the zero literal: no dashboard
/// precision yields a visible digit down there, and default float
/// stringification switches to exponential form in that regime.
const MIN_POSITIVE_DISPLAY: f64 = 1e-6;

/// A value decomposed for display.
///
/// The mantissa carries exactly the requested number of fraction digits
/// and stays below 1000 for every suffixed tier, except past the top of
/// the tier table where the oversized mantissa is kept rather than
/// inventing suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaledNumber {
    /// `"-"` for negative inputs, otherwise empty.
    pub sign: &'static str,
    /// Fixed-point digits, e.g. `"1.93"`.
    pub mantissa: String,
    /// Tier suffix, empty below the thousand tier.
    pub suffix: &'static str,
}

impl ScaledNumber {
    /// The degenerate decomposition shared by zero, non-finite, and
    /// sub-display inputs.
    fn zero_literal() -> Self {
        Self {
            sign: "",
            mantissa: "0".to_owned(),
            suffix: "",
        }
    }
}

impl fmt::Display for ScaledNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.sign, self.mantissa, self.suffix)
    }
}

/// Scale `value` for compact display with `decimals` fraction digits.
///
/// Total over all of `f64`: zero, `NaN`, and the infinities produce the
/// literal `"0"`; everything else gets a signed mantissa with the
/// matching tier suffix, or an unscaled rendering below the thousand
/// tier. Promotion happens after rounding, so a value whose rounded
/// mantissa reaches 1000 moves up a tier instead of showing four digits.
#[must_use]
pub fn scale_value(value: f64, decimals: usize) -> ScaledNumber {
    if !value.is_finite() {
        tracing::debug!(value, "Non-finite value normalized to zero literal");
        return ScaledNumber::zero_literal();
    }
    if value == 0.0 {
        return ScaledNumber::zero_literal();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    if abs < MIN_POSITIVE_DISPLAY {
        tracing::trace!(value, "Magnitude below display floor; rendering zero literal");
        return ScaledNumber::zero_literal();
    }

    let exponent = decimal_exponent(abs);
    if exponent < MIN_TIER_EXPONENT {
        return ScaledNumber {
            sign,
            mantissa: to_fixed(abs, decimals),
            suffix: "",
        };
    }

    // Largest tier not exceeding the exponent. The table is sorted
    // descending and ends at MIN_TIER_EXPONENT, so a match always exists.
    let mut idx = TIERS
        .iter()
        .position(|tier| exponent >= tier.exponent)
        .unwrap_or(TIERS.len() - 1);

    loop {
        let Tier { exponent: tier_exponent, suffix } = TIERS[idx];
        let mantissa = to_fixed(abs / pow10(tier_exponent), decimals);
        if integer_digits(&mantissa) <= 3 {
            return ScaledNumber { sign, mantissa, suffix };
        }
        if idx == 0 {
            tracing::debug!(value, suffix, "Beyond the largest tier; keeping oversized mantissa");
            return ScaledNumber { sign, mantissa, suffix };
        }
        tracing::trace!(
            value,
            from = suffix,
            to = TIERS[idx - 1].suffix,
            "Rounded mantissa reached 1000; promoting to the next tier"
        );
        idx -= 1;
    }
}

/// Base-10 exponent of a positive finite value, corrected for `log10`
/// landing one ulp on the wrong side of an exact power of ten.
fn decimal_exponent(abs: f64) -> i32 {
    #[allow(clippy::cast_possible_truncation)] // |log10| of a positive finite f64 is below 309
    let mut exponent = abs.log10().floor() as i32;
    if pow10(exponent + 1) <= abs {
        exponent += 1;
    } else if pow10(exponent) > abs {
        exponent -= 1;
    }
    exponent
}

fn pow10(exponent: i32) -> f64 {
    10_f64.powi(exponent)
}

/// Digits before the decimal point of a rendered mantissa.
fn integer_digits(mantissa: &str) -> usize {
    mantissa.find('.').map_or(mantissa.len(), |dot| dot)
}
