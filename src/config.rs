//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file; every field has a default so
//! the terminal also runs with no file at all. CLI flags override the file
//! before logging is initialized.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Endpoints and timeouts for the external data suppliers.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    /// Gamma API base URL (market metadata).
    #[serde(default = "default_gamma_url")]
    pub gamma_url: String,
    /// CLOB API base URL (order book snapshots).
    #[serde(default = "default_clob_url")]
    pub clob_url: String,
    /// Research lookup base URL.
    #[serde(default = "default_news_url")]
    pub news_url: String,
    /// Request timeout in seconds for all HTTP calls.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_gamma_url() -> String {
    "https://gamma-api.polymarket.com".into()
}

fn default_clob_url() -> String {
    "https://clob.polymarket.com".into()
}

fn default_news_url() -> String {
    "https://api.duckduckgo.com".into()
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

/// Defaults for the analysis view, used when flags are omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// How many active markets to load and rank by volume.
    #[serde(default = "default_market_limit")]
    pub market_limit: usize,
    /// Default trade notional in dollars.
    #[serde(default = "default_trade_size")]
    pub trade_size_usd: Decimal,
    /// Default belief probability.
    #[serde(default = "default_belief")]
    pub belief: f64,
    /// Default confidence pseudo-count.
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    /// Samples on the belief density curve.
    #[serde(default = "default_curve_points")]
    pub curve_points: usize,
    /// Research links to show per market.
    #[serde(default = "default_news_items")]
    pub news_items: usize,
}

const fn default_market_limit() -> usize {
    20
}

fn default_trade_size() -> Decimal {
    Decimal::from(250)
}

const fn default_belief() -> f64 {
    0.55
}

const fn default_confidence() -> f64 {
    25.0
}

const fn default_curve_points() -> usize {
    200
}

const fn default_news_items() -> usize {
    5
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            gamma_url: default_gamma_url(),
            clob_url: default_clob_url(),
            news_url: default_news_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            market_limit: default_market_limit(),
            trade_size_usd: default_trade_size(),
            belief: default_belief(),
            confidence: default_confidence(),
            curve_points: default_curve_points(),
            news_items: default_news_items(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            logging: LoggingConfig::default(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    /// Load from an explicit path, or fall back to `config.toml` in the
    /// working directory and then to built-in defaults if neither exists.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let fallback = Path::new("config.toml");
                if fallback.exists() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.network.gamma_url.is_empty() {
            return Err(ConfigError::MissingField { field: "gamma_url" }.into());
        }
        if self.network.clob_url.is_empty() {
            return Err(ConfigError::MissingField { field: "clob_url" }.into());
        }
        if self.network.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be at least 1 second".into(),
            }
            .into());
        }
        if self.analysis.curve_points < 2 {
            return Err(ConfigError::InvalidValue {
                field: "curve_points",
                reason: "need at least 2 samples to span [0, 1]".into(),
            }
            .into());
        }
        if self.analysis.market_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "market_limit",
                reason: "must load at least one market".into(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize the tracing subscriber from the `[logging]` section.
    ///
    /// `RUST_LOG` takes precedence over the configured level when set.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}
