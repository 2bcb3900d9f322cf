//! Expected value and Kelly sizing for a single directional trade.

use serde::Serialize;

/// Floor for the Kelly denominator as the entry price approaches 1.
const KELLY_DENOMINATOR_FLOOR: f64 = 1e-6;

/// Result of evaluating one trade against one belief.
///
/// A winning binary contract pays $1 per share and costs the entry price,
/// so `ev` is the expected payoff per dollar of notional. Kelly sizing is
/// floored at zero: a negative-edge trade reports "do not size in" rather
/// than a negative allocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TradeScenario {
    /// Trade notional in dollars, passed through from the caller.
    pub trade_size_usd: f64,
    /// Target belief probability, clamped to `[0, 1]`.
    pub belief_probability: f64,
    /// Slippage-adjusted entry price, clamped to `[0, 1]`.
    pub effective_entry_price: f64,
    /// Expected value as a percentage of notional.
    pub ev_percentage: f64,
    /// Kelly criterion sizing fraction, never negative.
    pub kelly_fraction: f64,
}

impl TradeScenario {
    /// Evaluate a trade: entry price and target probability are clamped to
    /// `[0, 1]` independently, then EV and Kelly fraction are derived.
    ///
    /// Pure and stateless: identical inputs produce identical output.
    #[must_use]
    pub fn evaluate(entry_price: f64, target_probability: f64, trade_size_usd: f64) -> Self {
        let price = entry_price.clamp(0.0, 1.0);
        let probability = target_probability.clamp(0.0, 1.0);

        let ev = probability - price;
        let denominator = (1.0 - price).max(KELLY_DENOMINATOR_FLOOR);
        let kelly_fraction = (ev / denominator).max(0.0);

        Self {
            trade_size_usd,
            belief_probability: probability,
            effective_entry_price: price,
            ev_percentage: ev * 100.0,
            kelly_fraction,
        }
    }

    /// True when the trade has non-negative expected value.
    #[must_use]
    pub fn is_favorable(&self) -> bool {
        self.ev_percentage >= 0.0
    }
}
