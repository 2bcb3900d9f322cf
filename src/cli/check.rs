//! Diagnostic checks.

use std::path::Path;

use crate::adapter::PolymarketClient;
use crate::cli::output;
use crate::config::Config;
use crate::error::Result;
use crate::exchange::MarketDataSource;

/// Validate the configuration file and echo the resolved settings.
pub fn config(path: Option<&Path>) -> Result<()> {
    output::section("Configuration");

    match Config::load_or_default(path) {
        Ok(config) => {
            output::key_value("gamma_url", &config.network.gamma_url);
            output::key_value("clob_url", &config.network.clob_url);
            output::key_value("news_url", &config.network.news_url);
            output::key_value("timeout", format!("{}s", config.network.timeout_secs));
            output::key_value("log level", &config.logging.level);
            output::key_value("markets", config.analysis.market_limit);
            output::key_value("trade size", format!("${}", config.analysis.trade_size_usd));
            output::key_value("curve points", config.analysis.curve_points);
            println!();
            output::ok("configuration valid");
            Ok(())
        }
        Err(error) => {
            output::error(&error.to_string());
            Err(error)
        }
    }
}

/// Probe the market data API with a minimal listing request.
pub async fn connection(config: Config) -> Result<()> {
    output::section("Connection");
    output::key_value("endpoint", &config.network.gamma_url);

    let client = PolymarketClient::new(&config.network)?;
    match client.active_markets(1).await {
        Ok(markets) => {
            output::ok(&format!(
                "reachable ({} market{} returned)",
                markets.len(),
                if markets.len() == 1 { "" } else { "s" }
            ));
            Ok(())
        }
        Err(error) => {
            output::error(&error.to_string());
            Err(error)
        }
    }
}
