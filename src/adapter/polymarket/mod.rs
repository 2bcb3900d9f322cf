//! Polymarket data supplier.
//!
//! Two REST surfaces back this adapter: the Gamma API for market
//! metadata and the CLOB API for order book snapshots.

mod client;
mod types;

pub use client::PolymarketClient;
