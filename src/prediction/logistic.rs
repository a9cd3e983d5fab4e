//! Logistic regression for binary direction classification

use ndarray::{Array1, Array2};

use crate::config::PredictorConfig;
use crate::error::ModelError;

/// L2-regularised logistic regression fitted by batch gradient descent
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    pub coefficients: Option<Array1<f64>>,
    pub intercept: Option<f64>,
    learning_rate: f64,
    max_iter: usize,
    tolerance: f64,
    l2_penalty: f64,
    /// Log loss per iteration of the last fit
    pub cost_history: Vec<f64>,
}

impl LogisticRegression {
    pub fn new(config: &PredictorConfig) -> Self {
        Self {
            coefficients: None,
            intercept: None,
            learning_rate: config.learning_rate,
            max_iter: config.max_iter,
            tolerance: config.tolerance,
            l2_penalty: config.l2_penalty,
            cost_history: Vec::new(),
        }
    }

    /// Numerically stable sigmoid
    fn sigmoid(z: f64) -> f64 {
        if z >= 0.0 {
            1.0 / (1.0 + (-z).exp())
        } else {
            let exp_z = z.exp();
            exp_z / (1.0 + exp_z)
        }
    }

    fn log_loss(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
        let eps = 1e-15;
        let n = y_true.len() as f64;
        -y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(&y, &p)| {
                let p = p.clamp(eps, 1.0 - eps);
                y * p.ln() + (1.0 - y) * (1.0 - p).ln()
            })
            .sum::<f64>()
            / n
    }

    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), ModelError> {
        if x.nrows() == 0 {
            return Err(ModelError::EmptyTrainingSet);
        }
        if x.nrows() != y.len() {
            return Err(ModelError::DimensionMismatch {
                expected: x.nrows(),
                got: y.len(),
            });
        }

        let n_samples = x.nrows() as f64;
        let mut weights = Array1::<f64>::zeros(x.ncols());
        let mut bias = 0.0;
        self.cost_history.clear();

        for iter in 0..self.max_iter {
            let predictions = (x.dot(&weights) + bias).mapv(Self::sigmoid);
            let errors = &predictions - y;

            let dw = x.t().dot(&errors) / n_samples + &weights * self.l2_penalty;
            let db = errors.sum() / n_samples;

            weights = &weights - &(dw * self.learning_rate);
            bias -= self.learning_rate * db;

            let cost = Self::log_loss(y, &predictions);
            self.cost_history.push(cost);
            if iter > 0 && (self.cost_history[iter - 1] - cost).abs() < self.tolerance {
                break;
            }
        }

        self.coefficients = Some(weights);
        self.intercept = Some(bias);
        Ok(())
    }

    pub fn predict_proba(&self, x: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        let weights = self.coefficients.as_ref().ok_or(ModelError::NotFitted)?;
        let bias = self.intercept.ok_or(ModelError::NotFitted)?;
        if x.ncols() != weights.len() {
            return Err(ModelError::DimensionMismatch {
                expected: weights.len(),
                got: x.ncols(),
            });
        }
        Ok((x.dot(weights) + bias).mapv(Self::sigmoid))
    }

    /// Class labels (0.0 or 1.0) at the 0.5 probability cut
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        let proba = self.predict_proba(x)?;
        Ok(proba.mapv(|p| if p >= 0.5 { 1.0 } else { 0.0 }))
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new(&PredictorConfig::default())
    }
}
