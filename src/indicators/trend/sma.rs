//! SMA (Simple Moving Average) indicator

use crate::common::math;

/// Trailing simple moving average of `closes` over `period` bars.
///
/// The first `period - 1` entries are `None`.
pub fn calculate_sma(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    math::rolling_mean(closes, period)
}
