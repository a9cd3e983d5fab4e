use crate::config::StrategyConfig;
use crate::models::indicators::{AlignedSeries, IndicatorRow, IndicatorValues};
use crate::models::signal::Signal;

/// Stateless RSI + moving-average trend rule.
///
/// First match wins:
/// 1. RSI below oversold and short MA above long MA: Buy
/// 2. RSI above overbought and short MA below long MA: Sell
/// 3. otherwise Hold
#[derive(Debug, Clone)]
pub struct SignalGenerator {
    rsi_oversold: f64,
    rsi_overbought: f64,
}

impl SignalGenerator {
    pub fn new(config: &StrategyConfig) -> Self {
        Self {
            rsi_oversold: config.rsi_oversold,
            rsi_overbought: config.rsi_overbought,
        }
    }

    pub fn generate_signal(&self, values: &IndicatorValues) -> Signal {
        match self.analyze_rsi(values.rsi) {
            RsiAnalysis::Oversold if values.ma_short > values.ma_long => Signal::Buy,
            RsiAnalysis::Overbought if values.ma_short < values.ma_long => Signal::Sell,
            _ => Signal::Hold,
        }
    }

    /// Rows with any undefined indicator map to Hold
    pub fn generate_for_row(&self, row: &IndicatorRow) -> Signal {
        row.values()
            .map(|values| self.generate_signal(&values))
            .unwrap_or(Signal::Hold)
    }

    /// One signal per aligned bar, same length and order as the input
    pub fn generate_series(&self, series: &AlignedSeries) -> Vec<Signal> {
        series
            .indicators()
            .iter()
            .map(|values| self.generate_signal(values))
            .collect()
    }

    fn analyze_rsi(&self, rsi: f64) -> RsiAnalysis {
        if rsi < self.rsi_oversold {
            RsiAnalysis::Oversold
        } else if rsi > self.rsi_overbought {
            RsiAnalysis::Overbought
        } else {
            RsiAnalysis::Neutral
        }
    }
}

impl Default for SignalGenerator {
    fn default() -> Self {
        Self::new(&StrategyConfig::default())
    }
}

enum RsiAnalysis {
    Oversold,
    Overbought,
    Neutral,
}
