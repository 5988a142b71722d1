//! Common utility functions for tax calculations.
//!
//! This module provides shared functionality used across the calculators:
//! whole-naira rounding and non-negativity clamps.

use rust_decimal::Decimal;

/// Rounds a decimal value to a whole naira using half-up rounding.
///
/// Midpoints round away from zero, so N0.50 becomes N1. Every monetary
/// output of the suite passes through this before it is surfaced.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use ngtax_core::calculations::common::round_naira;
///
/// assert_eq!(round_naira(dec!(123.4)), dec!(123));
/// assert_eq!(round_naira(dec!(123.5)), dec!(124));
/// assert_eq!(round_naira(dec!(123.6)), dec!(124));
/// ```
pub fn round_naira(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use ngtax_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100), dec!(200)), dec!(200));
/// assert_eq!(max(dec!(200), dec!(100)), dec!(200));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Clamps a value below at zero.
///
/// Negative user input and over-subtracted taxable amounts both land here.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use ngtax_core::calculations::common::non_negative;
///
/// assert_eq!(non_negative(dec!(-5)), dec!(0));
/// assert_eq!(non_negative(dec!(5)), dec!(5));
/// ```
pub fn non_negative(value: Decimal) -> Decimal {
    max(value, Decimal::ZERO)
}
