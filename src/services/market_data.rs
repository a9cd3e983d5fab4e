//! Market data provider interface and file-backed implementations.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::models::bars::PriceBar;

#[async_trait]
pub trait MarketDataProvider {
    /// Daily bars for a symbol, oldest first
    async fn get_bars(&self, symbol: &str) -> Result<Vec<PriceBar>>;
}

/// Reads `<data_dir>/<SYMBOL><suffix>.csv`.
///
/// Rows with a missing or non-numeric field are dropped, bars are sorted by
/// date, and only the most recent `lookback` bars are kept (0 keeps all).
#[derive(Debug, Clone)]
pub struct CsvMarketDataProvider {
    data_dir: PathBuf,
    suffix: String,
    lookback: usize,
}

impl CsvMarketDataProvider {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            suffix: String::new(),
            lookback: 0,
        }
    }

    /// Exchange suffix appended to the symbol, e.g. `.NS`
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_lookback(mut self, lookback: usize) -> Self {
        self.lookback = lookback;
        self
    }

    pub fn path_for(&self, symbol: &str) -> PathBuf {
        self.data_dir.join(format!("{}{}.csv", symbol, self.suffix))
    }

    /// Parse CSV content into bars, dropping incomplete rows
    pub fn parse_csv(content: &[u8]) -> Result<Vec<PriceBar>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content);

        let mut bars = Vec::new();
        let mut dropped = 0usize;
        for row in reader.deserialize::<RawBar>() {
            let raw = row.context("Failed to read CSV row")?;
            match raw.into_bar() {
                Some(bar) => bars.push(bar),
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            debug!(dropped, "Dropped incomplete price rows");
        }

        bars.sort_by_key(|b| b.timestamp);
        Ok(bars)
    }
}

#[async_trait]
impl MarketDataProvider for CsvMarketDataProvider {
    async fn get_bars(&self, symbol: &str) -> Result<Vec<PriceBar>> {
        let path = self.path_for(symbol);
        let content = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to open price file: {:?}", path))?;

        let mut bars = Self::parse_csv(&content)
            .with_context(|| format!("Failed to parse price file: {:?}", path))?;

        if self.lookback > 0 && bars.len() > self.lookback {
            bars.drain(..bars.len() - self.lookback);
        }
        debug!(symbol = %symbol, bars = bars.len(), "Loaded {} bars for {}", bars.len(), symbol);
        Ok(bars)
    }
}

/// Serves preloaded bars; used for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct StaticMarketDataProvider {
    bars: HashMap<String, Vec<PriceBar>>,
}

impl StaticMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bars(mut self, symbol: impl Into<String>, bars: Vec<PriceBar>) -> Self {
        self.bars.insert(symbol.into(), bars);
        self
    }
}

#[async_trait]
impl MarketDataProvider for StaticMarketDataProvider {
    async fn get_bars(&self, symbol: &str) -> Result<Vec<PriceBar>> {
        self.bars
            .get(symbol)
            .cloned()
            .ok_or_else(|| anyhow!("no bars configured for {}", symbol))
    }
}

/// CSV row before cleaning: any field may be blank
#[derive(Debug, Deserialize)]
struct RawBar {
    #[serde(alias = "Date", alias = "timestamp")]
    date: Option<String>,
    #[serde(alias = "Open")]
    open: Option<String>,
    #[serde(alias = "High")]
    high: Option<String>,
    #[serde(alias = "Low")]
    low: Option<String>,
    #[serde(alias = "Close")]
    close: Option<String>,
    #[serde(alias = "Volume")]
    volume: Option<String>,
}

impl RawBar {
    fn into_bar(self) -> Option<PriceBar> {
        let date = self.date?;
        // Accept both plain dates and full timestamps ("2024-01-02 00:00:00+05:30").
        let timestamp = NaiveDate::parse_from_str(date.get(..10)?, "%Y-%m-%d").ok()?;
        let number = |field: Option<String>| -> Option<f64> {
            field?.parse::<f64>().ok().filter(|v| v.is_finite())
        };
        let volume = number(self.volume)?;
        if volume < 0.0 {
            return None;
        }

        Some(PriceBar {
            timestamp,
            open: number(self.open)?,
            high: number(self.high)?,
            low: number(self.low)?,
            close: number(self.close)?,
            volume: volume.round() as u64,
        })
    }
}
