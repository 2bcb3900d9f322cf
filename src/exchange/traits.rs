//! Port trait definitions for external data suppliers.
//!
//! The quantitative core never performs I/O; these traits are the seam
//! where order books, market metadata, and research links enter the
//! system. Implementations own their own timeouts and retries.

use async_trait::async_trait;

use crate::domain::{MarketInfo, NewsItem, OrderBook, TokenId};
use crate::error::Result;

/// Supplier of market metadata and order book snapshots.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch active markets, ranked by volume descending, at most `limit`.
    async fn active_markets(&self, limit: usize) -> Result<Vec<MarketInfo>>;

    /// Fetch the current order book snapshot for an outcome token.
    ///
    /// Levels must arrive pre-sorted: bids descending, asks ascending.
    async fn order_book(&self, token_id: &TokenId) -> Result<OrderBook>;

    /// Get the supplier name for logging/debugging.
    fn source_name(&self) -> &'static str;
}

/// Supplier of research links for a market question.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Search for research relevant to `query`, at most `max_items`.
    ///
    /// A blank query returns an empty list without a request.
    async fn search(&self, query: &str, max_items: usize) -> Result<Vec<NewsItem>>;
}
