//! Monetary helpers. All amounts are `Decimal`, never binary floats.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept for display and totals.
pub const CURRENCY_SCALE: u32 = 2;

/// Round half-up to cents. The result always carries two decimal places, so
/// it prints as `0.00` rather than `0`.
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_SCALE);
    rounded
}

/// Currency-prefixed, two-decimal string, e.g. `€44.98`.
pub fn format_price(symbol: &str, amount: Decimal) -> String {
    format!("{}{}", symbol, round_currency(amount))
}
