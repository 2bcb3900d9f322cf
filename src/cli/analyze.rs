//! Handler for the `analyze` command.
//!
//! Terminal rendition of the research view: market header, research
//! links, the belief density curve, and the EV/Kelly scenario panel.

use std::io::IsTerminal;

use dialoguer::Select;

use super::AnalyzeArgs;
use crate::app::{Analysis, AnalysisRequest, App};
use crate::cli::output;
use crate::config::Config;
use crate::domain::{DensityCurve, MarketInfo, PriceLevel, TradeSide};
use crate::error::{Error, Result};

/// Analyze one trade against a market's live order book.
pub async fn execute(config: Config, args: &AnalyzeArgs) -> Result<()> {
    let app = App::new(config)?;

    let mut request = AnalysisRequest::from_defaults(&app.config().analysis);
    request.side = args.side.into();
    if let Some(size) = args.size {
        request.trade_size_usd = size;
    }
    if let Some(belief) = args.belief {
        request.belief = belief;
    }
    if let Some(confidence) = args.confidence {
        request.confidence = confidence;
    }
    if let Some(points) = args.points {
        request.curve_points = points;
    }

    let market = match &args.market {
        Some(query) => app.find_market(query).await?,
        None => pick_market(&app).await?,
    };

    let analysis = app.analyze(market, &request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis.scenario)?);
        return Ok(());
    }

    render(&analysis);
    Ok(())
}

/// Interactive market picker for TTY sessions without `--market`.
async fn pick_market(app: &App) -> Result<MarketInfo> {
    if !std::io::stdin().is_terminal() {
        return Err(Error::Usage(
            "--market <id|slug> is required outside a terminal".to_string(),
        ));
    }

    let mut markets = app.top_markets().await;
    if markets.is_empty() {
        return Err(Error::Usage(
            "no active markets available to choose from".to_string(),
        ));
    }

    let labels: Vec<String> = markets
        .iter()
        .map(|m| format!("{} (${})", m.question(), m.volume().round_dp(0)))
        .collect();

    let index = Select::new()
        .with_prompt("Choose a market")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(markets.swap_remove(index))
}

fn render(analysis: &Analysis) {
    let scenario = &analysis.scenario;

    output::section(analysis.market.question());
    output::key_value("Market", analysis.market.id());
    output::key_value("Token", &analysis.token);
    output::key_value(
        "Volume",
        format!("${}", analysis.market.volume().round_dp(0)),
    );
    output::key_value("Side", analysis.side);

    if !analysis.news.is_empty() {
        output::section("Research");
        for item in &analysis.news {
            println!("  • {} — {}", item.title, item.source);
            println!("    {}", item.url);
        }
    }

    output::section("Belief distribution");
    for line in density_chart(&analysis.curve, scenario.effective_entry_price) {
        println!("  {line}");
    }
    output::note("  (│ marks the effective entry price)");

    output::section("Execution & analysis");
    output::key_value("Trade size", format!("${}", scenario.trade_size_usd));
    if let Some(best) = best_level(analysis) {
        output::key_value(
            "Best quote",
            format!("{} × {}", best.price(), best.size()),
        );
    }
    output::key_value("Entry price", format!("{:.4}", scenario.effective_entry_price));
    output::key_value("Belief", format!("{:.2}", scenario.belief_probability));
    output::key_value(
        "EV",
        output::signed(
            scenario.ev_percentage,
            &format!("{:+.2}%", scenario.ev_percentage),
        ),
    );
    output::key_value("Kelly", format!("{:.3}", scenario.kelly_fraction));

    println!();
    if scenario.is_favorable() {
        output::ok("positive expected value at this size");
    } else {
        output::warn("negative expected value; Kelly sizing is zero");
    }
    println!();
}

fn best_level(analysis: &Analysis) -> Option<&PriceLevel> {
    match analysis.side {
        TradeSide::Buy => analysis.book.best_ask(),
        TradeSide::Sell => analysis.book.best_bid(),
    }
}

const CHART_WIDTH: usize = 60;
const CHART_HEIGHT: usize = 9;

/// Render the density curve as a fixed-height block chart with the
/// effective entry price marked as a vertical rule.
fn density_chart(curve: &DensityCurve, entry_price: f64) -> Vec<String> {
    if curve.ys.len() < 2 {
        return Vec::new();
    }

    let peak = curve.peak().max(f64::MIN_POSITIVE);
    let last = curve.ys.len() - 1;
    let columns: Vec<f64> = (0..CHART_WIDTH)
        .map(|col| {
            let idx = col * last / (CHART_WIDTH - 1);
            curve.ys[idx] / peak
        })
        .collect();

    let marker = (entry_price.clamp(0.0, 1.0) * (CHART_WIDTH - 1) as f64).round() as usize;

    let mut lines = Vec::with_capacity(CHART_HEIGHT + 2);
    for row in (0..CHART_HEIGHT).rev() {
        let threshold = (row as f64 + 0.5) / CHART_HEIGHT as f64;
        let line: String = columns
            .iter()
            .enumerate()
            .map(|(col, value)| {
                if *value >= threshold {
                    '█'
                } else if col == marker {
                    '│'
                } else {
                    ' '
                }
            })
            .collect();
        lines.push(line);
    }
    lines.push("─".repeat(CHART_WIDTH));
    lines.push(format!("0{:>width$}", "1", width = CHART_WIDTH - 1));
    lines
}
