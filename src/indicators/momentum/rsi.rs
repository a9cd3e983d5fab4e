//! RSI (Relative Strength Index) indicator

use crate::common::math;

/// Calculate the RSI series for `closes`.
///
/// Per-bar gains and losses (zero at bar 0, which has no prior close) are
/// smoothed with Wilder's factor `alpha = 1 / period` starting from that zero,
/// so the first real change enters with weight `alpha`. Entry `t` is defined
/// once `period` changes have been observed (`t >= period`), so the first
/// `period` entries are `None` and the output is index-aligned with `closes`.
///
/// RSI = 100 - (100 / (1 + RS)), RS = Average Gain / Average Loss, with
/// 0 when the average gain is zero and 100 when only the average loss is.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() < period + 1 {
        return out;
    }

    let mut gains = Vec::with_capacity(closes.len());
    let mut losses = Vec::with_capacity(closes.len());
    gains.push(0.0);
    losses.push(0.0);
    for w in closes.windows(2) {
        let change = w[1] - w[0];
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let alpha = 1.0 / period as f64;
    let avg_gains = math::exponential_smoothing(&gains, alpha);
    let avg_losses = math::exponential_smoothing(&losses, alpha);

    for t in period..closes.len() {
        out[t] = Some(rsi_from_averages(avg_gains[t], avg_losses[t]));
    }
    out
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_gain <= 0.0 {
        return 0.0;
    }
    if avg_loss <= 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    (100.0 - (100.0 / (1.0 + rs))).clamp(0.0, 100.0)
}
