//! Two-decimal rounding shared by every aggregation output.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{CURRENCY_DECIMALS, PERCENT_DECIMALS};

/// Rounds a currency figure to the cent, half away from zero.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Percentage share of `value` in `total`, rounded to two decimals.
///
/// A zero denominator is coerced to 1 so an empty filtered set yields zero
/// percentages instead of a division error.
pub fn percentage_of(value: Decimal, total: Decimal) -> Decimal {
    let denominator = if total.is_zero() { Decimal::ONE } else { total };
    (value / denominator * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(PERCENT_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}
