//! Monetary types for prices, sizes, and notionals.
//!
//! Market data arrives as decimal strings; keeping prices and sizes as
//! `Decimal` preserves them exactly through the order book walk. Analytics
//! in probability space (EV, Kelly, densities) convert to `f64` at the seam.

use rust_decimal::Decimal;

/// Contract price in dollars, quoted on (0, 1] for binary outcomes.
pub type Price = Decimal;

/// Available size in shares at a price level.
pub type Volume = Decimal;

/// Dollar notional (price x size, or a requested trade size).
pub type Notional = Decimal;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn level_notional_is_exact() {
        let price: Price = dec!(0.40);
        let size: Volume = dec!(50);
        let notional: Notional = price * size;

        assert_eq!(notional, dec!(20.00));
    }
}
