//! Order book snapshot types.

use super::money::{Notional, Price, Volume};

/// A single price level in the order book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLevel {
    price: Price,
    size: Volume,
}

impl PriceLevel {
    /// Create a new price level.
    #[must_use]
    pub const fn new(price: Price, size: Volume) -> Self {
        Self { price, size }
    }

    /// Get the price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Get the size/volume.
    #[must_use]
    pub const fn size(&self) -> Volume {
        self.size
    }

    /// Dollar notional resting at this level (price x size).
    #[must_use]
    pub fn notional(&self) -> Notional {
        self.price * self.size
    }
}

/// Immutable order book snapshot for one outcome token.
///
/// Level ordering follows the supplier's contract: bids descending by
/// price, asks ascending. The ordering is load-bearing for the
/// effective-price walk and is never re-derived here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    bids: Vec<PriceLevel>,
    asks: Vec<PriceLevel>,
}

impl OrderBook {
    /// Create an order book from pre-sorted bid and ask levels.
    #[must_use]
    pub const fn new(bids: Vec<PriceLevel>, asks: Vec<PriceLevel>) -> Self {
        Self { bids, asks }
    }

    /// Create an empty order book (no liquidity on either side).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            bids: Vec::new(),
            asks: Vec::new(),
        }
    }

    /// Get all bid levels, best (highest) first.
    #[must_use]
    pub fn bids(&self) -> &[PriceLevel] {
        &self.bids
    }

    /// Get all ask levels, best (lowest) first.
    #[must_use]
    pub fn asks(&self) -> &[PriceLevel] {
        &self.asks
    }

    /// Best bid (highest buy price).
    #[must_use]
    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.bids.first()
    }

    /// Best ask (lowest sell price).
    #[must_use]
    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.asks.first()
    }

    /// True when neither side has any levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn best_levels_are_the_first_on_each_side() {
        let book = OrderBook::new(
            vec![
                PriceLevel::new(dec!(0.48), dec!(10)),
                PriceLevel::new(dec!(0.45), dec!(30)),
            ],
            vec![
                PriceLevel::new(dec!(0.52), dec!(20)),
                PriceLevel::new(dec!(0.55), dec!(40)),
            ],
        );

        assert_eq!(book.best_bid().map(PriceLevel::price), Some(dec!(0.48)));
        assert_eq!(book.best_ask().map(PriceLevel::price), Some(dec!(0.52)));
    }

    #[test]
    fn empty_book_has_no_best_levels() {
        let book = OrderBook::empty();

        assert!(book.is_empty());
        assert!(book.best_bid().is_none());
        assert!(book.best_ask().is_none());
    }
}
