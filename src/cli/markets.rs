//! Handler for the `markets` command.

use tabled::{Table, Tabled};

use super::MarketsArgs;
use crate::app::App;
use crate::cli::output;
use crate::config::Config;
use crate::domain::MarketInfo;
use crate::error::Result;

#[derive(Tabled)]
struct MarketRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Question")]
    question: String,
    #[tabled(rename = "Volume ($)")]
    volume: String,
    #[tabled(rename = "Slug")]
    slug: String,
}

const QUESTION_WIDTH: usize = 48;

impl From<&MarketInfo> for MarketRow {
    fn from(market: &MarketInfo) -> Self {
        Self {
            id: market.id().to_string(),
            question: truncate(market.question(), QUESTION_WIDTH),
            volume: market.volume().round_dp(0).to_string(),
            slug: market.slug().to_string(),
        }
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let head: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{head}…")
    }
}

/// List the top active markets by volume.
pub async fn execute(mut config: Config, args: &MarketsArgs) -> Result<()> {
    if let Some(limit) = args.limit {
        config.analysis.market_limit = limit;
    }

    let app = App::new(config)?;
    let markets = app.top_markets().await;

    output::section("Active markets");
    if markets.is_empty() {
        output::warn("no active markets returned; try again later");
        return Ok(());
    }

    let rows: Vec<MarketRow> = markets.iter().map(MarketRow::from).collect();
    let table = Table::new(rows).to_string();
    for line in table.lines() {
        println!("  {line}");
    }

    println!();
    println!(
        "  Run {} to evaluate a trade",
        output::highlight("polyscope analyze --market <id|slug>")
    );
    println!();

    Ok(())
}
