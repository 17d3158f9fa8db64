use std::fs;
use std::path::{Path, PathBuf};

use analytics::AnalyticsEngine;
use anyhow::{Context, bail};
use backtester::{BacktestReport, Backtester, create_strategy};
use clap::{Parser, Subcommand};
use configuration::{Config, ConfigOverrides, init_tracing, load_config, load_config_from};
use core_types::{
    BacktestBar, BacktestRequest, PredictionRequest, PredictionResponse, StrategyId, TradeOutcome,
    TradeRecord,
};
use dashboard::{ForecastView, format_pct, format_price};
use serde::de::DeserializeOwned;

mod render;

/// The main entry point for the Stockcast application.
fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; STOCKCAST__* variables may come from the shell.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = match &cli.overrides.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    }
    .context("Failed to load configuration")?;
    let config = cli.overrides.apply(config);

    let _guard = init_tracing(&config.logging).context("Failed to initialize logging")?;

    // Execute the appropriate command
    match cli.command {
        Commands::Forecast(args) => handle_forecast(args, &config),
        Commands::Trades(args) => handle_trades(args),
        Commands::Backtest(args) => handle_backtest(args, &config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Turns stock return forecasts into price paths, signals and performance statistics.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    overrides: ConfigOverrides,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compound a prediction response into a price path and summarize it.
    Forecast(ForecastArgs),
    /// Summarize a list of completed trades.
    Trades(TradesArgs),
    /// Replay a strategy over historical bars.
    Backtest(BacktestArgs),
}

#[derive(Parser)]
struct ForecastArgs {
    /// Path to a prediction response JSON file.
    #[arg(long)]
    input: PathBuf,

    /// Print the assembled view as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct TradesArgs {
    /// Path to a JSON array of `{ "returnPct": <fraction> }` records.
    #[arg(long)]
    input: PathBuf,

    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct BacktestArgs {
    /// The ticker the bars belong to (e.g., "AAPL").
    #[arg(long)]
    ticker: String,

    /// Path to a JSON array of `{ "date", "close", "signal"? }` bars.
    #[arg(long)]
    input: PathBuf,

    /// The strategy to run (buy_and_hold, lstm_signals). Defaults to the configured one.
    #[arg(long)]
    strategy: Option<StrategyId>,

    /// Starting capital. Defaults to the configured one.
    #[arg(long)]
    capital: Option<f64>,

    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_forecast(args: ForecastArgs, config: &Config) -> anyhow::Result<()> {
    let response: PredictionResponse = read_json(&args.input)?;
    if !response.success {
        bail!("prediction for {} failed: {}", response.ticker, response.message);
    }
    let forecast_days = u32::try_from(response.predictions.len()).unwrap_or(u32::MAX);
    let request = PredictionRequest::new(&response.ticker, forecast_days, config.signals.difficulty)
        .validated()
        .context("Prediction response does not describe a valid forecast")?;

    let view = ForecastView::assemble(&response, config.analytics.periods_per_year)
        .with_context(|| format!("Failed to assemble forecast for {}", request.ticker))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!(
        "{}: {} -> {} over {} periods",
        view.ticker,
        format_price(view.current_price),
        format_price(view.target_price()),
        view.rows.len()
    );
    println!("{}", render::forecast_table(&view, config.signals.difficulty));
    println!("{}", render::performance_table(&view.summary));

    let (buy, sell, hold) = view.signal_counts();
    println!(
        "Signals: {} buy, {} sell, {} hold | compounded return {} | additive return {} | model confidence {}",
        buy,
        sell,
        hold,
        format_pct(view.compounded_return),
        format_pct(view.simple_return),
        format_pct(view.forecast_confidence)
    );
    Ok(())
}

fn handle_trades(args: TradesArgs) -> anyhow::Result<()> {
    let records: Vec<TradeRecord> = read_json(&args.input)?;
    let trades = records
        .iter()
        .map(TradeOutcome::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let summary = AnalyticsEngine::new().summarize_trades(&trades)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", render::trade_table(&summary));
    }
    Ok(())
}

fn handle_backtest(args: BacktestArgs, config: &Config) -> anyhow::Result<()> {
    let request = BacktestRequest::new(
        args.ticker,
        args.strategy.unwrap_or(config.backtest.strategy),
        args.capital.unwrap_or(config.backtest.initial_capital),
        config.signals.difficulty,
    )
    .validated()?;

    let bars: Vec<BacktestBar> = read_json(&args.input)?;
    let strategy = create_strategy(request.strategy);

    let backtester = Backtester::new(AnalyticsEngine::new(), config.analytics.periods_per_year);
    let report = backtester
        .run(strategy.as_ref(), &bars, request.initial_capital)
        .with_context(|| format!("Backtest of {} on {} failed", strategy.id(), request.ticker))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_backtest(&request.ticker, &report);
    }
    Ok(())
}

fn print_backtest(ticker: &str, report: &BacktestReport) {
    println!(
        "{} {}: {} -> {} ({})",
        ticker,
        report.strategy,
        format_price(report.initial_capital),
        format_price(report.final_portfolio_value),
        format_pct(report.performance.total_return)
    );
    println!("{}", render::performance_table(&report.performance));
    println!("{}", render::trade_table(&report.trades));
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), "input loaded");
    Ok(value)
}
