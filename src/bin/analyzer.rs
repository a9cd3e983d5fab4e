//! Signalbench analyzer
//!
//! Runs the indicator / signal / backtest / direction-accuracy pipeline for
//! every configured ticker and appends one result record per ticker.

use dotenvy::dotenv;
use signalbench::config::RunnerConfig;
use signalbench::core::{AnalysisRuntime, TickerPipeline};
use signalbench::logging;
use signalbench::services::{CsvMarketDataProvider, JsonLinesSink, RunSummary};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = RunnerConfig::from_env()?;
    info!(
        environment = %signalbench::config::get_environment(),
        tickers = ?config.tickers,
        data_dir = ?config.data_dir,
        results = ?config.results_path,
        "Starting Signalbench analyzer"
    );

    let provider = CsvMarketDataProvider::new(config.data_dir.clone())
        .with_suffix(config.ticker_suffix.clone())
        .with_lookback(config.lookback_bars);
    let sink = JsonLinesSink::new(config.results_path.clone());
    let pipeline = TickerPipeline::new(&config.strategy)?;

    let runtime = AnalysisRuntime::new(pipeline, Arc::new(provider), Arc::new(sink))
        .with_concurrency(config.concurrency);
    let outcomes = runtime.run(&config.tickers).await;

    let mut records = Vec::new();
    for outcome in outcomes {
        match outcome.result {
            Ok(record) => {
                println!("\n{} Results:", record.stock);
                println!(
                    "Total Return: {:.2}% | Win Ratio: {:.2}% | ML Accuracy: {:.2}%",
                    record.total_return_pct, record.win_ratio_pct, record.accuracy_pct
                );
                records.push(record);
            }
            Err(failure) => {
                warn!(symbol = %outcome.symbol, "{}", failure);
                println!("\n{}: {}", outcome.symbol, failure);
            }
        }
    }

    if records.is_empty() {
        return Err("no ticker produced a result".into());
    }

    let summary = RunSummary::from_records(&records);
    println!("\nSummary P&L:");
    for row in &summary.pnl {
        println!("  {:<12} {:>8.2}%", row.stock, row.value_pct);
    }
    println!("Win Ratio:");
    for row in &summary.win_ratios {
        println!("  {:<12} {:>8.2}%", row.stock, row.value_pct);
    }
    println!(
        "Average Return: {:.2}% | Average ML Accuracy: {:.2}%",
        summary.average_return_pct, summary.average_accuracy_pct
    );

    Ok(())
}
