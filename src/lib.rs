//! Polyscope - prediction market research and trade analysis.
//!
//! This crate models the economics of a single prediction-market trade:
//! it converts a live order book into a slippage-adjusted entry price,
//! represents a trader's belief about the outcome as a Beta distribution,
//! and derives expected value and Kelly position sizing from the two.
//!
//! # Architecture
//!
//! The quantitative core is pure and synchronous; I/O lives behind ports:
//!
//! - **`domain`** - Value types and the two engines
//!   - `effective_price` - price-time order book walk with partial fills
//!   - `BetaBelief` - belief-to-Beta-shape mapping and density sampling
//!   - `TradeScenario` - EV and Kelly sizing for one directional trade
//!
//! - **`exchange`** - Port traits for market data and research suppliers
//! - **`adapter`** - Polymarket (Gamma + CLOB) and DuckDuckGo clients
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Order books, beliefs, scenarios, pricing
//! - [`error`] - Error types for the crate
//! - [`exchange`] - Trait definitions for data suppliers
//! - [`adapter`] - HTTP implementations of the supplier ports
//! - [`app`] - Application orchestration
//! - [`cli`] - Terminal commands and rendering
//!
//! # Example
//!
//! ```
//! use polyscope::domain::{effective_price, OrderBook, PriceLevel, TradeSide};
//! use rust_decimal_macros::dec;
//!
//! let book = OrderBook::new(
//!     vec![],
//!     vec![PriceLevel::new(dec!(0.40), dec!(1000))],
//! );
//! let entry = effective_price(&book, TradeSide::Buy, dec!(400)).unwrap();
//! assert_eq!(entry, dec!(0.40));
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod exchange;
