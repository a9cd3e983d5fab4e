//! Stage outputs and the per-ticker record handed to the result sink

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::common::math::round_to;

/// Aggregate performance of the lagged-signal strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BacktestResult {
    /// Final cumulative sum of strategy returns, in percent
    pub total_return_pct: f64,
    /// Share of active-trade bars with a positive strategy return, in percent
    pub win_ratio_pct: f64,
    /// Bars whose previous-bar signal was not Hold
    pub active_trades: usize,
    pub winning_trades: usize,
}

/// Out-of-sample next-bar direction accuracy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub accuracy_pct: f64,
    pub train_size: usize,
    pub test_size: usize,
}

/// One ticker's result row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub stock: String,
    pub total_return_pct: f64,
    pub win_ratio_pct: f64,
    pub accuracy_pct: f64,
    /// ISO-8601 (RFC 3339) time the record was produced
    pub timestamp: String,
}

impl AnalysisRecord {
    /// Build a record with percentages rounded to two decimals
    pub fn new(
        stock: impl Into<String>,
        backtest: &BacktestResult,
        prediction: &PredictionResult,
        produced_at: DateTime<Utc>,
    ) -> Self {
        Self {
            stock: stock.into(),
            total_return_pct: round_to(backtest.total_return_pct, 2),
            win_ratio_pct: round_to(backtest.win_ratio_pct, 2),
            accuracy_pct: round_to(prediction.accuracy_pct, 2),
            timestamp: produced_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
