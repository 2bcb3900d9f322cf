//! Implementations of the data supplier ports.

pub mod news;
pub mod polymarket;

pub use news::DuckDuckGoClient;
pub use polymarket::PolymarketClient;
