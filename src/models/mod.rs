//! Shared data models spanning the analysis stages.

pub mod bars;
pub mod indicators;
pub mod result;
pub mod signal;

pub use bars::{PriceBar, PriceSeries};
pub use indicators::{AlignedSeries, IndicatorRow, IndicatorSeries, IndicatorValues};
pub use result::{AnalysisRecord, BacktestResult, PredictionResult};
pub use signal::Signal;
