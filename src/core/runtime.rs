//! Multi-ticker runtime: fetch, analyze and record each symbol independently

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::core::pipeline::{TickerAnalysis, TickerPipeline};
use crate::models::bars::PriceSeries;
use crate::models::result::AnalysisRecord;
use crate::services::market_data::MarketDataProvider;
use crate::services::sink::ResultSink;

/// Why a ticker produced no record
#[derive(Debug, thiserror::Error)]
pub enum TickerFailure {
    #[error("no data for ticker {symbol}: {reason}")]
    NoData { symbol: String, reason: String },

    #[error("analysis failed for {symbol}: {source}")]
    Analysis {
        symbol: String,
        #[source]
        source: crate::error::AnalysisError,
    },

    #[error("failed to record result for {symbol}: {reason}")]
    Sink { symbol: String, reason: String },

    #[error("worker for {symbol} stopped unexpectedly: {reason}")]
    Worker { symbol: String, reason: String },
}

/// Per-ticker outcome, reported in the order tickers were requested
#[derive(Debug)]
pub struct TickerOutcome {
    pub symbol: String,
    pub result: Result<AnalysisRecord, TickerFailure>,
}

/// Runs the pipeline over many tickers as independent tasks
pub struct AnalysisRuntime {
    pipeline: Arc<TickerPipeline>,
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
    sink: Arc<dyn ResultSink + Send + Sync>,
    concurrency: usize,
}

impl AnalysisRuntime {
    pub fn new(
        pipeline: TickerPipeline,
        provider: Arc<dyn MarketDataProvider + Send + Sync>,
        sink: Arc<dyn ResultSink + Send + Sync>,
    ) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            provider,
            sink,
            concurrency: 1,
        }
    }

    /// Maximum tickers processed at once (at least 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub async fn run(&self, symbols: &[String]) -> Vec<TickerOutcome> {
        info!(
            tickers = symbols.len(),
            concurrency = self.concurrency,
            "AnalysisRuntime: processing {} tickers",
            symbols.len()
        );

        let permits = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();

        for (index, symbol) in symbols.iter().enumerate() {
            let symbol = symbol.clone();
            let permits = permits.clone();
            let pipeline = self.pipeline.clone();
            let provider = self.provider.clone();
            let sink = self.sink.clone();

            tasks.spawn(async move {
                let result = match permits.acquire_owned().await {
                    Ok(_permit) => process_ticker(&symbol, pipeline, provider, sink).await,
                    Err(e) => Err(TickerFailure::Worker {
                        symbol: symbol.clone(),
                        reason: e.to_string(),
                    }),
                };
                (index, TickerOutcome { symbol, result })
            });
        }

        let mut slots: Vec<Option<TickerOutcome>> = symbols.iter().map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, outcome)) => slots[index] = Some(outcome),
                Err(e) => error!(error = %e, "AnalysisRuntime: ticker task panicked"),
            }
        }

        symbols
            .iter()
            .zip(slots)
            .map(|(symbol, slot)| {
                slot.unwrap_or_else(|| TickerOutcome {
                    symbol: symbol.clone(),
                    result: Err(TickerFailure::Worker {
                        symbol: symbol.clone(),
                        reason: "task did not complete".to_string(),
                    }),
                })
            })
            .collect()
    }
}

async fn process_ticker(
    symbol: &str,
    pipeline: Arc<TickerPipeline>,
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
    sink: Arc<dyn ResultSink + Send + Sync>,
) -> Result<AnalysisRecord, TickerFailure> {
    let start = Instant::now();
    info!(symbol = %symbol, "Fetching data for {}", symbol);

    let bars = provider.get_bars(symbol).await.map_err(|e| {
        warn!(symbol = %symbol, error = %e, "No data for ticker {}", symbol);
        TickerFailure::NoData {
            symbol: symbol.to_string(),
            reason: format!("{e:#}"),
        }
    })?;

    if bars.is_empty() {
        warn!(symbol = %symbol, "No data for ticker {}", symbol);
        return Err(TickerFailure::NoData {
            symbol: symbol.to_string(),
            reason: "provider returned no bars".to_string(),
        });
    }

    let series = PriceSeries::new(symbol, bars).map_err(|source| TickerFailure::Analysis {
        symbol: symbol.to_string(),
        source,
    })?;

    debug!(symbol = %symbol, bars = series.len(), "Running analysis pipeline");
    let analysis = run_blocking(symbol, pipeline, series).await?;

    let record = analysis.to_record();
    sink.append(&record).await.map_err(|e| {
        error!(symbol = %symbol, error = %e, "Failed to record result for {}", symbol);
        TickerFailure::Sink {
            symbol: symbol.to_string(),
            reason: format!("{e:#}"),
        }
    })?;

    info!(
        symbol = %symbol,
        total_return_pct = record.total_return_pct,
        win_ratio_pct = record.win_ratio_pct,
        accuracy_pct = record.accuracy_pct,
        active_trades = analysis.backtest.active_trades,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Logged {} results",
        symbol
    );
    Ok(record)
}

async fn run_blocking(
    symbol: &str,
    pipeline: Arc<TickerPipeline>,
    series: PriceSeries,
) -> Result<TickerAnalysis, TickerFailure> {
    let joined = tokio::task::spawn_blocking(move || pipeline.analyze(&series)).await;
    match joined {
        Ok(Ok(analysis)) => Ok(analysis),
        Ok(Err(source)) => {
            if source.is_insufficient_data() {
                warn!(symbol = %symbol, error = %source, "Insufficient data for {}", symbol);
            } else {
                error!(symbol = %symbol, error = %source, "Analysis failed for {}", symbol);
            }
            Err(TickerFailure::Analysis {
                symbol: symbol.to_string(),
                source,
            })
        }
        Err(e) => Err(TickerFailure::Worker {
            symbol: symbol.to_string(),
            reason: e.to_string(),
        }),
    }
}
