//! Slippage-adjusted execution pricing.
//!
//! Walks an order book in price-time order, consuming levels until a
//! requested dollar notional is filled, and returns the size-weighted
//! average fill price. This is the standard cost model for market-order
//! slippage: the first level that can cover the remaining notional is
//! consumed partially and the walk stops there.

use rust_decimal::Decimal;
use tracing::debug;

use super::error::DomainError;
use super::money::{Notional, Price};
use super::order_book::OrderBook;

/// Direction of the modeled trade.
///
/// A buy lifts asks; a sell hits bids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    /// Human-readable label for logs and output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute the effective entry price for a trade of `notional_usd` dollars.
///
/// Traverses the side matching `side` (asks for buys, bids for sells) in
/// the book's own order, best price first. Levels with non-positive
/// notional are skipped as phantom liquidity. The level that covers the
/// remaining notional is filled partially (`remaining / price` shares) and
/// traversal stops; deeper levels are never touched.
///
/// # Errors
///
/// - [`DomainError::NonPositiveTradeSize`] if `notional_usd <= 0`, before
///   any traversal.
/// - [`DomainError::InsufficientDepth`] if the book runs out of liquidity
///   before the notional is filled, or contains no usable liquidity.
pub fn effective_price(
    book: &OrderBook,
    side: TradeSide,
    notional_usd: Notional,
) -> Result<Price, DomainError> {
    if notional_usd <= Decimal::ZERO {
        return Err(DomainError::NonPositiveTradeSize { size: notional_usd });
    }

    let levels = match side {
        TradeSide::Buy => book.asks(),
        TradeSide::Sell => book.bids(),
    };

    let mut remaining = notional_usd;
    let mut total_cost = Decimal::ZERO;
    let mut total_shares = Decimal::ZERO;

    for level in levels {
        let level_notional = level.notional();
        if level_notional <= Decimal::ZERO {
            continue;
        }
        if remaining <= level_notional {
            // This level covers the rest of the order: partial fill, stop.
            let fill_shares = remaining / level.price();
            total_cost += remaining;
            total_shares += fill_shares;
            remaining = Decimal::ZERO;
            break;
        }
        total_cost += level_notional;
        total_shares += level.size();
        remaining -= level_notional;
    }

    if remaining > Decimal::ZERO || total_shares <= Decimal::ZERO {
        return Err(DomainError::InsufficientDepth {
            requested: notional_usd,
            unfilled: remaining,
        });
    }

    let price = total_cost / total_shares;
    debug!(
        side = %side,
        notional = %notional_usd,
        shares = %total_shares,
        price = %price,
        "computed effective price"
    );
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order_book::PriceLevel;
    use rust_decimal_macros::dec;

    fn asks_book(asks: Vec<PriceLevel>) -> OrderBook {
        OrderBook::new(vec![], asks)
    }

    #[test]
    fn single_level_fill_returns_level_price() {
        let book = asks_book(vec![PriceLevel::new(dec!(0.40), dec!(1000))]);

        let price = effective_price(&book, TradeSide::Buy, dec!(400)).unwrap();

        assert_eq!(price, dec!(0.40));
    }

    #[test]
    fn partial_fill_inside_first_level_stays_at_first_price() {
        let book = asks_book(vec![
            PriceLevel::new(dec!(0.40), dec!(100)),
            PriceLevel::new(dec!(0.50), dec!(100)),
        ]);

        let price = effective_price(&book, TradeSide::Buy, dec!(60)).unwrap();

        assert_eq!(price, dec!(0.40));
    }

    #[test]
    fn fill_spanning_two_levels_blends_prices() {
        // Level 1 notional: 0.40 * 50 = 20. Remaining 10 fills at 0.50
        // for 20 shares. Total: cost 30, shares 70.
        let book = asks_book(vec![
            PriceLevel::new(dec!(0.40), dec!(50)),
            PriceLevel::new(dec!(0.50), dec!(100)),
        ]);

        let price = effective_price(&book, TradeSide::Buy, dec!(30)).unwrap();

        assert_eq!(price, dec!(30) / dec!(70));
        assert!(price > dec!(0.40) && price < dec!(0.50));
    }

    #[test]
    fn sell_side_walks_bids() {
        let book = OrderBook::new(
            vec![
                PriceLevel::new(dec!(0.60), dec!(50)),
                PriceLevel::new(dec!(0.55), dec!(100)),
            ],
            vec![],
        );

        // 0.60 * 50 = 30 notional at the best bid; remaining 3 at 0.55.
        let price = effective_price(&book, TradeSide::Sell, dec!(33)).unwrap();

        assert!(price < dec!(0.60) && price > dec!(0.55));
    }

    #[test]
    fn zero_notional_levels_are_skipped() {
        let book = asks_book(vec![
            PriceLevel::new(dec!(0.35), dec!(0)),
            PriceLevel::new(dec!(0.40), dec!(1000)),
        ]);

        let price = effective_price(&book, TradeSide::Buy, dec!(400)).unwrap();

        assert_eq!(price, dec!(0.40));
    }

    #[test]
    fn rejects_non_positive_trade_size() {
        let book = asks_book(vec![PriceLevel::new(dec!(0.40), dec!(1000))]);

        let err = effective_price(&book, TradeSide::Buy, dec!(0)).unwrap_err();
        assert!(matches!(err, DomainError::NonPositiveTradeSize { .. }));

        let err = effective_price(&book, TradeSide::Buy, dec!(-5)).unwrap_err();
        assert!(matches!(err, DomainError::NonPositiveTradeSize { .. }));
    }

    #[test]
    fn empty_book_reports_insufficient_depth() {
        let book = OrderBook::empty();

        let err = effective_price(&book, TradeSide::Buy, dec!(100)).unwrap_err();

        assert_eq!(
            err,
            DomainError::InsufficientDepth {
                requested: dec!(100),
                unfilled: dec!(100),
            }
        );
    }

    #[test]
    fn exhausted_book_reports_unfilled_remainder() {
        // Total depth notional: 0.40 * 100 = 40.
        let book = asks_book(vec![PriceLevel::new(dec!(0.40), dec!(100))]);

        let err = effective_price(&book, TradeSide::Buy, dec!(100)).unwrap_err();

        assert_eq!(
            err,
            DomainError::InsufficientDepth {
                requested: dec!(100),
                unfilled: dec!(60),
            }
        );
    }

    #[test]
    fn all_phantom_levels_count_as_no_liquidity() {
        let book = asks_book(vec![
            PriceLevel::new(dec!(0.40), dec!(0)),
            PriceLevel::new(dec!(0.50), dec!(0)),
        ]);

        let err = effective_price(&book, TradeSide::Buy, dec!(10)).unwrap_err();

        assert!(matches!(err, DomainError::InsufficientDepth { .. }));
    }

    #[test]
    fn buy_price_is_monotone_in_trade_size() {
        let book = asks_book(vec![
            PriceLevel::new(dec!(0.40), dec!(100)),
            PriceLevel::new(dec!(0.50), dec!(100)),
            PriceLevel::new(dec!(0.60), dec!(100)),
        ]);

        let sizes = [dec!(10), dec!(40), dec!(60), dec!(90), dec!(140)];
        let mut last = Decimal::ZERO;
        for size in sizes {
            let price = effective_price(&book, TradeSide::Buy, size).unwrap();
            assert!(price >= last, "widening a buy must not improve the fill");
            last = price;
        }
    }

    #[test]
    fn sell_price_is_monotone_in_trade_size() {
        let book = OrderBook::new(
            vec![
                PriceLevel::new(dec!(0.60), dec!(100)),
                PriceLevel::new(dec!(0.50), dec!(100)),
            ],
            vec![],
        );

        let sizes = [dec!(10), dec!(60), dec!(100)];
        let mut last = Decimal::ONE;
        for size in sizes {
            let price = effective_price(&book, TradeSide::Sell, size).unwrap();
            assert!(price <= last, "widening a sell must not improve the fill");
            last = price;
        }
    }

    #[test]
    fn price_stays_within_consumed_level_range() {
        let book = asks_book(vec![
            PriceLevel::new(dec!(0.30), dec!(10)),
            PriceLevel::new(dec!(0.45), dec!(10)),
            PriceLevel::new(dec!(0.70), dec!(10)),
        ]);

        // Consumes all three levels: 3 + 4.5 + part of 7.
        let price = effective_price(&book, TradeSide::Buy, dec!(10)).unwrap();

        assert!(price >= dec!(0.30) && price <= dec!(0.70));
    }
}
