//! Daily price bars and the validated per-ticker series

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// One daily OHLCV bar.
///
/// Deserializes from lower-case headers or the capitalised headers used by
/// common daily-history CSV exports (`Date,Open,High,Low,Close,Volume`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    #[serde(alias = "Date", alias = "date")]
    pub timestamp: NaiveDate,
    #[serde(alias = "Open")]
    pub open: f64,
    #[serde(alias = "High")]
    pub high: f64,
    #[serde(alias = "Low")]
    pub low: f64,
    #[serde(alias = "Close")]
    pub close: f64,
    #[serde(alias = "Volume")]
    pub volume: u64,
}

impl PriceBar {
    pub fn new(
        timestamp: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Bar where every price equals `close`
    pub fn flat(timestamp: NaiveDate, close: f64, volume: u64) -> Self {
        Self::new(timestamp, close, close, close, close, volume)
    }

    fn prices(&self) -> [(&'static str, f64); 4] {
        [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ]
    }
}

/// Price bars for one symbol, ordered by strictly ascending timestamp.
///
/// Construction is the only validation point: every later stage can assume
/// finite non-negative prices, strictly positive closes and unique,
/// increasing dates.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    symbol: String,
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, bars: Vec<PriceBar>) -> Result<Self, AnalysisError> {
        let symbol = symbol.into();

        for (i, bar) in bars.iter().enumerate() {
            for (field, value) in bar.prices() {
                if !value.is_finite() {
                    return Err(AnalysisError::InvalidInput(format!(
                        "{symbol}: non-finite {field} at bar {i} ({})",
                        bar.timestamp
                    )));
                }
                if value < 0.0 {
                    return Err(AnalysisError::InvalidInput(format!(
                        "{symbol}: negative {field} {value} at bar {i} ({})",
                        bar.timestamp
                    )));
                }
            }
            // Closes are return bases downstream, so zero is unusable there.
            if bar.close == 0.0 {
                return Err(AnalysisError::InvalidInput(format!(
                    "{symbol}: zero close at bar {i} ({})",
                    bar.timestamp
                )));
            }
        }

        if let Some(pos) = bars
            .windows(2)
            .position(|w| w[1].timestamp <= w[0].timestamp)
        {
            return Err(AnalysisError::InvalidInput(format!(
                "{symbol}: timestamps not strictly ascending at bar {} ({} after {})",
                pos + 1,
                bars[pos + 1].timestamp,
                bars[pos].timestamp
            )));
        }

        Ok(Self { symbol, bars })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn timestamps(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.timestamp).collect()
    }
}
