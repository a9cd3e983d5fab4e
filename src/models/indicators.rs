use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Indicator values for one bar; `None` during a rolling warm-up
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IndicatorRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ma_short: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ma_long: Option<f64>,
}

impl IndicatorRow {
    /// All three indicators, if every one is defined
    pub fn values(&self) -> Option<IndicatorValues> {
        Some(IndicatorValues {
            rsi: self.rsi?,
            ma_short: self.ma_short?,
            ma_long: self.ma_long?,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.values().is_some()
    }
}

/// Fully defined indicator triple, the only input signals and features read
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValues {
    pub rsi: f64,
    pub ma_short: f64,
    pub ma_long: f64,
}

impl IndicatorValues {
    pub fn new(rsi: f64, ma_short: f64, ma_long: f64) -> Self {
        Self {
            rsi,
            ma_short,
            ma_long,
        }
    }

    /// Feature vector order used by the direction classifier
    pub fn features(&self) -> [f64; 3] {
        [self.rsi, self.ma_short, self.ma_long]
    }
}

/// Per-bar indicators, index-aligned with the source bars (same length)
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSeries {
    timestamps: Vec<NaiveDate>,
    closes: Vec<f64>,
    rows: Vec<IndicatorRow>,
    required_bars: usize,
}

impl IndicatorSeries {
    pub(crate) fn new(
        timestamps: Vec<NaiveDate>,
        closes: Vec<f64>,
        rows: Vec<IndicatorRow>,
        required_bars: usize,
    ) -> Result<Self, AnalysisError> {
        check_len("indicator timestamps", rows.len(), timestamps.len())?;
        check_len("indicator closes", rows.len(), closes.len())?;
        Ok(Self {
            timestamps,
            closes,
            rows,
            required_bars,
        })
    }

    pub fn rows(&self) -> &[IndicatorRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Minimum bar count the engine needed to produce any values
    pub fn required_bars(&self) -> usize {
        self.required_bars
    }

    /// True when the engine had too few bars and every row is undefined
    pub fn is_insufficient(&self) -> bool {
        !self.rows.iter().any(IndicatorRow::is_complete)
    }

    /// Drop warm-up rows, keeping only bars where every indicator is defined.
    ///
    /// An all-undefined series is reported as `InsufficientData` so that no
    /// downstream stage runs on it.
    pub fn complete(&self) -> Result<AlignedSeries, AnalysisError> {
        if self.is_insufficient() {
            return Err(AnalysisError::InsufficientData {
                stage: "indicators",
                required: self.required_bars,
                available: self.rows.len(),
            });
        }

        let mut timestamps = Vec::new();
        let mut closes = Vec::new();
        let mut indicators = Vec::new();
        for (i, row) in self.rows.iter().enumerate() {
            if let Some(values) = row.values() {
                timestamps.push(self.timestamps[i]);
                closes.push(self.closes[i]);
                indicators.push(values);
            }
        }

        AlignedSeries::new(timestamps, closes, indicators)
    }
}

/// Warm-up-trimmed bars: dates, closes and indicators share one index.
///
/// The equal-length invariant is checked in [`AlignedSeries::new`], which is
/// the only way to build one.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedSeries {
    timestamps: Vec<NaiveDate>,
    closes: Vec<f64>,
    indicators: Vec<IndicatorValues>,
}

impl AlignedSeries {
    pub fn new(
        timestamps: Vec<NaiveDate>,
        closes: Vec<f64>,
        indicators: Vec<IndicatorValues>,
    ) -> Result<Self, AnalysisError> {
        check_len("aligned timestamps", closes.len(), timestamps.len())?;
        check_len("aligned indicators", closes.len(), indicators.len())?;
        Ok(Self {
            timestamps,
            closes,
            indicators,
        })
    }

    pub fn timestamps(&self) -> &[NaiveDate] {
        &self.timestamps
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn indicators(&self) -> &[IndicatorValues] {
        &self.indicators
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }
}

fn check_len(context: &'static str, expected: usize, actual: usize) -> Result<(), AnalysisError> {
    if expected != actual {
        return Err(AnalysisError::AlignmentViolation {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
