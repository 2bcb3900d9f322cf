//! Data supplier abstraction layer.
//!
//! Defines the ports the research terminal consumes, enabling any
//! market-data or research backend behind a common interface.

mod traits;

pub use traits::{MarketDataSource, NewsSource};
