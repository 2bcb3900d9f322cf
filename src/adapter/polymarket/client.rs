//! Polymarket REST API client.
//!
//! Fetches market metadata from the Gamma API and order book snapshots
//! from the CLOB API. Both endpoints are public and unauthenticated.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use super::types::{BookResponse, GammaEvent, GammaMarket};
use crate::config::NetworkConfig;
use crate::domain::{MarketInfo, OrderBook, TokenId};
use crate::error::Result;
use crate::exchange::MarketDataSource;

/// HTTP client for the Polymarket Gamma and CLOB APIs.
pub struct PolymarketClient {
    http: Client,
    gamma_url: Url,
    clob_url: Url,
}

impl PolymarketClient {
    /// Create a client from the network configuration.
    ///
    /// The configured timeout applies to every request.
    pub fn new(config: &NetworkConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            gamma_url: Url::parse(&config.gamma_url)?,
            clob_url: Url::parse(&config.clob_url)?,
        })
    }
}

#[async_trait]
impl MarketDataSource for PolymarketClient {
    /// Fetch active markets from the Gamma events listing.
    ///
    /// Markets are flattened out of their events, ranked by volume
    /// descending, and truncated to `limit`. Markets without outcome
    /// tokens are dropped.
    async fn active_markets(&self, limit: usize) -> Result<Vec<MarketInfo>> {
        let mut url = self.gamma_url.join("events")?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("active", "true");

        info!(url = %url, "Fetching active markets");

        let events: Vec<GammaEvent> = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut markets: Vec<MarketInfo> = events
            .into_iter()
            .flat_map(|event| event.markets)
            .filter_map(GammaMarket::into_market_info)
            .collect();

        markets.sort_by(|a, b| b.volume().cmp(&a.volume()));
        markets.truncate(limit);

        debug!(count = markets.len(), "Fetched markets");

        Ok(markets)
    }

    /// Fetch the live order book for a CLOB token.
    async fn order_book(&self, token_id: &TokenId) -> Result<OrderBook> {
        let mut url = self.clob_url.join("book")?;
        url.query_pairs_mut()
            .append_pair("token_id", token_id.as_str());

        info!(url = %url, "Fetching order book");

        let book: BookResponse = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let book = book.into_order_book();
        debug!(
            bids = book.bids().len(),
            asks = book.asks().len(),
            "Fetched order book"
        );

        Ok(book)
    }

    fn source_name(&self) -> &'static str {
        "polymarket"
    }
}
