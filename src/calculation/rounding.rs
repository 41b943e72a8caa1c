//! Rounding of displayed hours and money.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places reported for hours and money.
pub const DISPLAY_SCALE: u32 = 2;

/// Rounds a value to two decimal places, halves away from zero.
///
/// The result always carries exactly two decimal places so that it
/// serializes as e.g. `"1000.00"`. Every value passed here is non-negative,
/// where this matches rounding half up.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::round_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_half_up(Decimal::from_str("5.555").unwrap()).to_string(), "5.56");
/// assert_eq!(round_half_up(Decimal::from(1000)).to_string(), "1000.00");
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DISPLAY_SCALE);
    rounded
}
