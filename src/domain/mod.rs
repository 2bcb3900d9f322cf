//! Exchange-agnostic domain logic.
//!
//! Value types for market data plus the two quantitative engines: the
//! execution pricing walk and the belief/scenario analytics. Everything
//! here is pure and synchronous; no entity outlives a single evaluation.

mod belief;
mod execution;
mod ids;
mod market;
mod money;
mod news;
mod order_book;
mod scenario;

pub mod error;

// Core domain types
pub use ids::{MarketId, TokenId};
pub use market::{MarketInfo, TokenInfo};
pub use money::{Notional, Price, Volume};
pub use news::NewsItem;
pub use order_book::{OrderBook, PriceLevel};

// Quantitative engines
pub use belief::{BetaBelief, DensityCurve};
pub use execution::{effective_price, TradeSide};
pub use scenario::TradeScenario;
