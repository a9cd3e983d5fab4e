//! Per-ticker analysis pipeline
//!
//! bars -> indicators -> warm-up trim -> {signals -> backtest, direction predictor}

use chrono::Utc;

use crate::backtest::Backtester;
use crate::config::StrategyConfig;
use crate::error::AnalysisError;
use crate::indicators::IndicatorEngine;
use crate::models::bars::PriceSeries;
use crate::models::result::{AnalysisRecord, BacktestResult, PredictionResult};
use crate::models::signal::Signal;
use crate::prediction::DirectionPredictor;
use crate::signals::SignalGenerator;

/// Full outcome of one ticker, before rounding into an [`AnalysisRecord`]
#[derive(Debug, Clone, PartialEq)]
pub struct TickerAnalysis {
    pub symbol: String,
    pub signals: Vec<Signal>,
    pub backtest: BacktestResult,
    pub prediction: PredictionResult,
}

impl TickerAnalysis {
    pub fn to_record(&self) -> AnalysisRecord {
        AnalysisRecord::new(self.symbol.clone(), &self.backtest, &self.prediction, Utc::now())
    }
}

/// Runs every analysis stage for one price series.
///
/// Stateless between calls, so one pipeline can serve any number of tickers
/// concurrently.
#[derive(Debug, Clone)]
pub struct TickerPipeline {
    engine: IndicatorEngine,
    generator: SignalGenerator,
    backtester: Backtester,
    predictor: DirectionPredictor,
}

impl TickerPipeline {
    pub fn new(config: &StrategyConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self {
            engine: IndicatorEngine::new(config),
            generator: SignalGenerator::new(config),
            backtester: Backtester::new(),
            predictor: DirectionPredictor::new(config),
        })
    }

    /// Backtest and predictor only run once indicators are fully defined for
    /// at least one bar; otherwise `InsufficientData` is returned.
    pub fn analyze(&self, series: &PriceSeries) -> Result<TickerAnalysis, AnalysisError> {
        let indicators = self.engine.compute(series)?;
        let aligned = indicators.complete()?;

        let signals = self.generator.generate_series(&aligned);
        let backtest = self.backtester.run(aligned.closes(), &signals)?;
        let prediction = self.predictor.evaluate(&aligned)?;

        Ok(TickerAnalysis {
            symbol: series.symbol().to_string(),
            signals,
            backtest,
            prediction,
        })
    }
}
