//! Amounts

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

/// Currency used when a price does not name one.
pub const DEFAULT_CURRENCY: &str = "usd";

/// Converts a major-unit amount (e.g. `19.99` dollars) into minor units
/// (`1999` cents), rounding midpoints away from zero.
///
/// Returns `None` when the minor-unit value does not fit in an `i64`.
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|value| value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|value| value.to_i64())
}
