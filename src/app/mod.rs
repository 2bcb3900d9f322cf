//! Application layer - wires data suppliers to the quantitative core.

use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use tracing::{info, warn};

use crate::adapter::{DuckDuckGoClient, PolymarketClient};
use crate::config::{AnalysisConfig, Config};
use crate::domain::{
    effective_price, BetaBelief, DensityCurve, MarketInfo, NewsItem, Notional, OrderBook, Price,
    TokenId, TradeScenario, TradeSide,
};
use crate::error::{Error, Result};
use crate::exchange::{MarketDataSource, NewsSource};

/// Inputs for one trade analysis, typically config defaults with CLI
/// overrides applied.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub side: TradeSide,
    pub trade_size_usd: Notional,
    pub belief: f64,
    pub confidence: f64,
    pub curve_points: usize,
}

impl AnalysisRequest {
    /// Build a request from the configured analysis defaults.
    #[must_use]
    pub fn from_defaults(defaults: &AnalysisConfig) -> Self {
        Self {
            side: TradeSide::Buy,
            trade_size_usd: defaults.trade_size_usd,
            belief: defaults.belief,
            confidence: defaults.confidence,
            curve_points: defaults.curve_points,
        }
    }
}

/// Everything the presentation layer needs to render one research view.
#[derive(Debug)]
pub struct Analysis {
    pub market: MarketInfo,
    pub token: TokenId,
    pub side: TradeSide,
    pub book: OrderBook,
    pub effective_entry: Price,
    pub scenario: TradeScenario,
    pub curve: DensityCurve,
    pub news: Vec<NewsItem>,
}

/// Research terminal orchestrator.
///
/// Owns the data supplier ports and runs the evaluation pipeline: order
/// book -> effective price -> belief -> scenario. Holds no state between
/// calls beyond the supplier handles.
pub struct App {
    config: Config,
    markets: Arc<dyn MarketDataSource>,
    news: Arc<dyn NewsSource>,
}

impl App {
    /// Create an app backed by the live Polymarket and DuckDuckGo APIs.
    pub fn new(config: Config) -> Result<Self> {
        let markets = Arc::new(PolymarketClient::new(&config.network)?);
        let news = Arc::new(DuckDuckGoClient::new(&config.network)?);
        Ok(Self::with_sources(config, markets, news))
    }

    /// Create an app over explicit supplier implementations.
    #[must_use]
    pub fn with_sources(
        config: Config,
        markets: Arc<dyn MarketDataSource>,
        news: Arc<dyn NewsSource>,
    ) -> Self {
        Self {
            config,
            markets,
            news,
        }
    }

    /// The resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Top active markets by volume.
    ///
    /// A supplier failure degrades to an empty list here so the terminal
    /// can render "no markets" instead of dying; the cause is logged.
    pub async fn top_markets(&self) -> Vec<MarketInfo> {
        let limit = self.config.analysis.market_limit;
        match self.markets.active_markets(limit).await {
            Ok(markets) => markets,
            Err(error) => {
                warn!(%error, source = self.markets.source_name(), "market listing failed");
                Vec::new()
            }
        }
    }

    /// Resolve a market by exact ID or slug.
    pub async fn find_market(&self, query: &str) -> Result<MarketInfo> {
        let markets = self
            .markets
            .active_markets(self.config.analysis.market_limit)
            .await?;

        markets
            .into_iter()
            .find(|m| m.matches(query))
            .ok_or_else(|| Error::MarketNotFound {
                query: query.to_string(),
            })
    }

    /// Run the full evaluation pipeline for one market.
    ///
    /// Research lookup failures are advisory and degrade to an empty
    /// list; pricing failures (bad size, thin book) propagate.
    pub async fn analyze(&self, market: MarketInfo, request: &AnalysisRequest) -> Result<Analysis> {
        let token = market
            .yes_token()
            .ok_or_else(|| Error::NoTradeableToken {
                market: market.id().to_string(),
            })?
            .token_id()
            .clone();

        let book = self.markets.order_book(&token).await?;
        let entry = effective_price(&book, request.side, request.trade_size_usd)?;

        let belief = BetaBelief::new(request.belief, request.confidence);
        let scenario = TradeScenario::evaluate(
            entry.to_f64().unwrap_or(0.0),
            belief.belief_probability(),
            request.trade_size_usd.to_f64().unwrap_or(0.0),
        );
        let curve = belief.density_curve(request.curve_points);

        let news = match self
            .news
            .search(market.question(), self.config.analysis.news_items)
            .await
        {
            Ok(items) => items,
            Err(error) => {
                warn!(%error, "research lookup failed");
                Vec::new()
            }
        };

        info!(
            market = %market.id(),
            side = %request.side,
            entry = %entry,
            ev_pct = scenario.ev_percentage,
            kelly = scenario.kelly_fraction,
            "analysis complete"
        );

        Ok(Analysis {
            market,
            token,
            side: request.side,
            book,
            effective_entry: entry,
            scenario,
            curve,
            news,
        })
    }
}
