//! Direction predictor: chronological split, fit, out-of-sample accuracy

use crate::config::{PredictorConfig, StrategyConfig};
use crate::error::AnalysisError;
use crate::models::indicators::AlignedSeries;
use crate::models::result::PredictionResult;
use crate::prediction::dataset::{Dataset, StandardScaler};
use crate::prediction::logistic::LogisticRegression;

#[derive(Debug, Clone)]
pub struct DirectionPredictor {
    train_ratio: f64,
    model: PredictorConfig,
}

impl DirectionPredictor {
    pub fn new(config: &StrategyConfig) -> Self {
        Self {
            train_ratio: config.train_ratio,
            model: config.predictor.clone(),
        }
    }

    /// Train on the leading share of bars and score next-bar direction on the rest
    pub fn evaluate(&self, series: &AlignedSeries) -> Result<PredictionResult, AnalysisError> {
        let dataset = Dataset::from_aligned(series);
        let (train, test) = dataset.split_chronological(self.train_ratio)?;

        let mut scaler = StandardScaler::new();
        scaler.fit(&train.x);

        let mut model = LogisticRegression::new(&self.model);
        model.fit(&scaler.transform(&train.x), &train.y)?;
        let predictions = model.predict(&scaler.transform(&test.x))?;

        let correct = predictions
            .iter()
            .zip(test.y.iter())
            .filter(|(p, y)| p == y)
            .count();

        Ok(PredictionResult {
            accuracy_pct: correct as f64 / test.n_samples() as f64 * 100.0,
            train_size: train.n_samples(),
            test_size: test.n_samples(),
        })
    }
}

impl Default for DirectionPredictor {
    fn default() -> Self {
        Self::new(&StrategyConfig::default())
    }
}
