//! Indicator engine: price bars in, per-bar indicator rows out

use crate::config::StrategyConfig;
use crate::error::AnalysisError;
use crate::indicators::momentum::calculate_rsi;
use crate::indicators::trend::calculate_sma;
use crate::models::bars::PriceSeries;
use crate::models::indicators::{IndicatorRow, IndicatorSeries};

/// Computes RSI and the short/long moving averages for a price series
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    rsi_period: usize,
    ma_short_window: usize,
    ma_long_window: usize,
}

impl IndicatorEngine {
    pub fn new(config: &StrategyConfig) -> Self {
        Self {
            rsi_period: config.rsi_period,
            ma_short_window: config.ma_short_window,
            ma_long_window: config.ma_long_window,
        }
    }

    /// Bars required before any row is produced
    pub fn min_bars(&self) -> usize {
        self.rsi_period.max(self.ma_long_window) + 1
    }

    /// One indicator row per bar.
    ///
    /// With fewer than [`IndicatorEngine::min_bars`] bars every row is
    /// undefined; callers detect that through
    /// [`IndicatorSeries::complete`], which reports `InsufficientData`.
    pub fn compute(&self, series: &PriceSeries) -> Result<IndicatorSeries, AnalysisError> {
        let closes = series.closes();
        let timestamps = series.timestamps();
        let n = closes.len();

        let rows = if n < self.min_bars() {
            vec![IndicatorRow::default(); n]
        } else {
            let rsi = calculate_rsi(&closes, self.rsi_period);
            let ma_short = calculate_sma(&closes, self.ma_short_window);
            let ma_long = calculate_sma(&closes, self.ma_long_window);
            rsi.into_iter()
                .zip(ma_short)
                .zip(ma_long)
                .map(|((rsi, ma_short), ma_long)| IndicatorRow {
                    rsi,
                    ma_short,
                    ma_long,
                })
                .collect()
        };

        IndicatorSeries::new(timestamps, closes, rows, self.min_bars())
    }
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self::new(&StrategyConfig::default())
    }
}
