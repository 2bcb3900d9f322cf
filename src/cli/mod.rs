//! Command-line interface definitions.

pub mod analyze;
pub mod check;
pub mod markets;
pub mod output;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::config::Config;
use crate::domain::TradeSide;
use crate::error::Result;

/// Polyscope - prediction market research and trade analysis.
#[derive(Parser, Debug)]
#[command(name = "polyscope")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List top active markets by volume
    Markets(MarketsArgs),

    /// Analyze a trade against a market's live order book
    Analyze(AnalyzeArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

#[derive(Parser, Debug)]
pub struct MarketsArgs {
    /// Maximum markets to list (overrides the configured limit)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Market ID or slug; prompts interactively when omitted
    #[arg(short, long)]
    pub market: Option<String>,

    /// Trade direction
    #[arg(long, value_enum, default_value_t = SideArg::Buy)]
    pub side: SideArg,

    /// Trade notional in dollars
    #[arg(long)]
    pub size: Option<Decimal>,

    /// Belief probability (clamped to [0, 1])
    #[arg(long)]
    pub belief: Option<f64>,

    /// Confidence strength (clamped to [1, 100])
    #[arg(long)]
    pub confidence: Option<f64>,

    /// Samples on the belief density curve
    #[arg(long)]
    pub points: Option<usize>,

    /// Emit the scenario as JSON instead of the research view
    #[arg(long)]
    pub json: bool,
}

/// Trade direction as a CLI flag.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideArg {
    Buy,
    Sell,
}

impl From<SideArg> for TradeSide {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Buy => Self::Buy,
            SideArg::Sell => Self::Sell,
        }
    }
}

impl std::fmt::Display for SideArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        })
    }
}

/// Subcommands for `polyscope check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file
    Config,
    /// Test connectivity to the market data API
    Connection,
}

/// Dispatch a parsed command line.
pub async fn execute(cli: Cli) -> Result<()> {
    match &cli.command {
        // Config checks report load failures themselves instead of dying
        // on the shared load path.
        Commands::Check(CheckCommand::Config) => check::config(cli.config.as_deref()),
        Commands::Check(CheckCommand::Connection) => {
            let config = load_config(&cli)?;
            check::connection(config).await
        }
        Commands::Markets(args) => {
            let config = load_config(&cli)?;
            config.init_logging();
            markets::execute(config, args).await
        }
        Commands::Analyze(args) => {
            let config = load_config(&cli)?;
            config.init_logging();
            analyze::execute(config, args).await
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    Ok(config)
}
