//! Domain errors for trade evaluation.
//!
//! These errors are deterministic: retrying the same inputs fails the same
//! way. Callers surface them to the user rather than recovering internally.

use thiserror::Error;

use super::money::Notional;

/// Errors raised while evaluating a trade against an order book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Requested trade notional must be positive.
    #[error("trade size must be positive, got {size}")]
    NonPositiveTradeSize {
        /// The invalid trade size that was provided.
        size: Notional,
    },

    /// The order book cannot absorb the requested notional. Covers both a
    /// book exhausted mid-fill and a book with no usable liquidity at all.
    #[error("order book depth insufficient: {unfilled} of {requested} notional unfilled")]
    InsufficientDepth {
        /// The trade notional that was requested.
        requested: Notional,
        /// Notional still unfilled when the book ran out.
        unfilled: Notional,
    },
}
