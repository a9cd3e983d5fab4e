//! Feature/label preparation and the chronological train/test split

use chrono::NaiveDate;
use ndarray::{Array1, Array2, Axis};

use crate::error::AnalysisError;
use crate::models::indicators::AlignedSeries;

/// Labelled samples in time order
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Feature matrix (n_samples x 3): rsi, ma_short, ma_long
    pub x: Array2<f64>,
    /// 1.0 when the next close is higher, else 0.0
    pub y: Array1<f64>,
    pub timestamps: Vec<NaiveDate>,
}

impl Dataset {
    pub const FEATURES: [&'static str; 3] = ["rsi", "ma_short", "ma_long"];

    /// Label every bar with the direction of the following close.
    ///
    /// The last bar has no successor and is dropped, so a series of `n` bars
    /// yields `n - 1` samples. Features of bar `t` only use data up to `t`.
    pub fn from_aligned(series: &AlignedSeries) -> Self {
        let closes = series.closes();
        let n_samples = series.len().saturating_sub(1);

        let mut x = Array2::<f64>::zeros((n_samples, Self::FEATURES.len()));
        let mut y = Array1::<f64>::zeros(n_samples);
        for t in 0..n_samples {
            for (j, value) in series.indicators()[t].features().iter().enumerate() {
                x[[t, j]] = *value;
            }
            y[t] = if closes[t + 1] > closes[t] { 1.0 } else { 0.0 };
        }

        Self {
            x,
            y,
            timestamps: series.timestamps()[..n_samples].to_vec(),
        }
    }

    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.n_samples() == 0
    }

    /// Number of leading samples assigned to training for `train_ratio`
    pub fn train_len(n_samples: usize, train_ratio: f64) -> usize {
        // The epsilon keeps exact products such as 0.8 * 10 from flooring to 7.
        ((n_samples as f64 * train_ratio) + 1e-9).floor() as usize
    }

    /// Split into leading training rows and trailing test rows.
    ///
    /// Order is never shuffled: every training sample precedes every test
    /// sample in time.
    pub fn split_chronological(&self, train_ratio: f64) -> Result<(Dataset, Dataset), AnalysisError> {
        let n = self.n_samples();
        let split = Self::train_len(n, train_ratio).min(n);
        let test_len = n - split;

        if split < 2 || test_len == 0 {
            return Err(AnalysisError::InsufficientData {
                stage: "direction predictor split",
                required: Self::min_samples(train_ratio),
                available: n,
            });
        }

        let train = Dataset {
            x: self.x.slice(ndarray::s![..split, ..]).to_owned(),
            y: self.y.slice(ndarray::s![..split]).to_owned(),
            timestamps: self.timestamps[..split].to_vec(),
        };
        let test = Dataset {
            x: self.x.slice(ndarray::s![split.., ..]).to_owned(),
            y: self.y.slice(ndarray::s![split..]).to_owned(),
            timestamps: self.timestamps[split..].to_vec(),
        };
        Ok((train, test))
    }

    /// Smallest sample count giving at least two training and one test row
    pub fn min_samples(train_ratio: f64) -> usize {
        (3..)
            .find(|&n| {
                let split = Self::train_len(n, train_ratio);
                split >= 2 && split < n
            })
            .unwrap_or(3)
    }
}

/// Column-wise standardisation fitted on training data only
#[derive(Debug, Clone, Default)]
pub struct StandardScaler {
    means: Option<Array1<f64>>,
    stds: Option<Array1<f64>>,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fit(&mut self, x: &Array2<f64>) {
        self.means = x.mean_axis(Axis(0));
        self.stds = Some(x.std_axis(Axis(0), 0.0));
    }

    /// Centre and scale each column; constant columns are only centred
    pub fn transform(&self, x: &Array2<f64>) -> Array2<f64> {
        let (means, stds) = match (&self.means, &self.stds) {
            (Some(m), Some(s)) => (m, s),
            _ => return x.clone(),
        };

        let mut out = x.clone();
        for mut row in out.rows_mut() {
            for (j, value) in row.iter_mut().enumerate() {
                *value -= means[j];
                if stds[j] > 1e-10 {
                    *value /= stds[j];
                }
            }
        }
        out
    }
}
