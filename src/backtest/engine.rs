//! Backtesting engine for the lagged-signal strategy

use crate::common::math;
use crate::error::AnalysisError;
use crate::models::result::BacktestResult;
use crate::models::signal::Signal;

/// Per-bar accounting of the strategy.
///
/// `strategy_returns[t] = signal[t-1] * raw_return[t]`; bar 0 has no prior
/// signal and contributes zero.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestLedger {
    pub raw_returns: Vec<f64>,
    pub strategy_returns: Vec<f64>,
    /// Running sum of strategy returns (fractional, not percent)
    pub cumulative_returns: Vec<f64>,
}

/// Backtesting engine
#[derive(Debug, Clone, Default)]
pub struct Backtester;

impl Backtester {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate total return and win ratio over aligned closes and signals
    pub fn run(&self, closes: &[f64], signals: &[Signal]) -> Result<BacktestResult, AnalysisError> {
        let ledger = self.ledger(closes, signals)?;

        let total_return_pct = ledger.cumulative_returns.last().copied().unwrap_or(0.0) * 100.0;

        // Active bars are those acting on a non-Hold signal from the bar before.
        let mut active_trades = 0;
        let mut winning_trades = 0;
        for (t, strategy_return) in ledger.strategy_returns.iter().enumerate().skip(1) {
            if signals[t - 1].is_active() {
                active_trades += 1;
                if *strategy_return > 0.0 {
                    winning_trades += 1;
                }
            }
        }

        let win_ratio_pct = if active_trades == 0 {
            0.0
        } else {
            winning_trades as f64 / active_trades as f64 * 100.0
        };

        Ok(BacktestResult {
            total_return_pct,
            win_ratio_pct,
            active_trades,
            winning_trades,
        })
    }

    /// Per-bar raw, strategy and cumulative returns
    pub fn ledger(&self, closes: &[f64], signals: &[Signal]) -> Result<BacktestLedger, AnalysisError> {
        if closes.len() != signals.len() {
            return Err(AnalysisError::AlignmentViolation {
                context: "backtest signals",
                expected: closes.len(),
                actual: signals.len(),
            });
        }
        if let Some(i) = closes.iter().position(|c| !c.is_finite()) {
            return Err(AnalysisError::InvalidInput(format!(
                "backtest close at index {i} is not finite"
            )));
        }

        let mut raw_returns = Vec::with_capacity(closes.len());
        let mut strategy_returns = Vec::with_capacity(closes.len());
        let mut cumulative_returns = Vec::with_capacity(closes.len());
        let mut cumulative = 0.0;

        for t in 0..closes.len() {
            let (raw, strategy) = if t == 0 {
                (0.0, 0.0)
            } else {
                let raw = math::pct_change(closes[t - 1], closes[t]).ok_or_else(|| {
                    AnalysisError::InvalidInput(format!(
                        "backtest close at index {} is zero",
                        t - 1
                    ))
                })?;
                (raw, signals[t - 1].position() * raw)
            };
            cumulative += strategy;
            raw_returns.push(raw);
            strategy_returns.push(strategy);
            cumulative_returns.push(cumulative);
        }

        Ok(BacktestLedger {
            raw_returns,
            strategy_returns,
            cumulative_returns,
        })
    }
}
