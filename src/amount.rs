//! Parsing and validation of the amount entered for a transaction.

use std::{fmt::Display, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::validation::ValidationFailure;

/// The number of fractional digits kept for amounts and totals.
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// The largest amount a single transaction may have.
///
/// Totals are sums of amounts no larger than this, so they stay far below
/// [Decimal::MAX] for any number of rows a session can hold.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// A positive amount of money with exactly two decimal places.
///
/// To create an `Amount` from user input, use [parse_amount].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Amount(Decimal);

impl Amount {
    /// The amount as a decimal number.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Create an amount without validation.
    ///
    /// The caller should ensure that `value` is positive and has at most two
    /// decimal places.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because
    /// if the invariant is violated it will cause incorrect totals but not
    /// affect memory safety.
    #[cfg(test)]
    pub(crate) fn new_unchecked(value: Decimal) -> Self {
        Self(value)
    }
}

impl FromStr for Amount {
    type Err = ValidationFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_amount(s)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Parse the raw text of the amount field.
///
/// Leading and trailing whitespace is ignored and an empty field counts as
/// zero. Valid amounts are rounded to two decimal places with
/// [round_amount].
///
/// # Errors
///
/// This function will return a:
/// - [ValidationFailure::NotANumber] if `raw` is not a decimal number,
/// - or [ValidationFailure::NotPositive] if the number is less than zero,
/// - or [ValidationFailure::Zero] if the number is zero after rounding,
/// - or [ValidationFailure::TooLarge] if the number is greater than [MAX_AMOUNT].
pub fn parse_amount(raw: &str) -> Result<Amount, ValidationFailure> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationFailure::Zero);
    }

    let value = Decimal::from_str(raw).map_err(|_| ValidationFailure::NotANumber)?;

    if value < Decimal::ZERO {
        return Err(ValidationFailure::NotPositive);
    }

    let rounded = round_amount(value);

    if rounded.is_zero() {
        return Err(ValidationFailure::Zero);
    }

    if rounded > MAX_AMOUNT {
        return Err(ValidationFailure::TooLarge);
    }

    Ok(Amount(rounded))
}

/// Round `value` to two decimal places, with midpoints rounded away from zero.
///
/// For example, 12.345 rounds to 12.35 and 12.344 rounds to 12.34.
pub fn round_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        AMOUNT_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    )
}
