//! Currency rounding helpers
//!
//! Every currency figure the engine emits goes through [`round_currency`], so each one
//! carries exactly two decimal places no matter how it was accumulated.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places for every emitted currency value
pub const CURRENCY_SCALE: u32 = 2;

/// Largest magnitude accepted for a currency input (10^15).
///
/// Sums and products of values in this range stay far inside `Decimal`'s 28 digits, so the
/// core arithmetic cannot overflow and rounding always reaches two places.
pub const MAX_CURRENCY_MAGNITUDE: i64 = 1_000_000_000_000_000;

/// True when `value` is within [`MAX_CURRENCY_MAGNITUDE`]
pub fn within_bounds(value: Decimal) -> bool {
    value.abs() <= Decimal::from(MAX_CURRENCY_MAGNITUDE)
}

/// Round to cents (half away from zero) and pad the scale to exactly two places.
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_SCALE);
    rounded
}

/// Sum raw values exactly, then round once.
pub fn sum_currency<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    round_currency(values.into_iter().sum())
}

/// Zero with currency scale (`0.00`)
pub fn zero() -> Decimal {
    round_currency(Decimal::ZERO)
}
