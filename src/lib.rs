//! herdfmt — numeric display formatting for herd dashboards.
//!
//! Compact magnitude notation (`1.93B`), currency (`$1,234.50` /
//! `$1.93M`), weights, unit quantities, and percentages, all total over
//! `f64`: zero, `NaN`, and the infinities render as the zero literal of
//! the requested format instead of failing, and no input ever renders in
//! exponential notation.
//!
//! ```
//! use herdfmt::{format_compact_number, format_currency, format_weight};
//!
//! assert_eq!(format_compact_number(1_230_000.0, 2), "1.23M");
//! assert_eq!(format_currency(1234.5, 2, 2), "$1,234.50");
//! assert_eq!(format_weight(2_500_000.0, 1, 2), "2.50M tons");
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod fixed;
pub mod format;
pub mod scale;
pub mod tiers;

pub use format::{
    COMPACT_THRESHOLD, DEFAULT_COMPACT_DECIMALS, DEFAULT_CURRENCY_DECIMALS,
    DEFAULT_QUANTITY_DECIMALS, DEFAULT_WEIGHT_DECIMALS, format_compact_number, format_currency,
    format_percent, format_quantity, format_weight,
};
pub use scale::{ScaledNumber, scale_value};
pub use tiers::{MIN_TIER_EXPONENT, TIERS, Tier};
