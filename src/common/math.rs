//! Numeric primitives used by the indicator and prediction layers

/// Trailing arithmetic mean for every position.
///
/// Entry `i` is `None` until `window` values are available, so the output is
/// index-aligned with `values`.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }

    // Each window is summed directly; a running sum drifts on long series.
    for (i, slot) in out.iter_mut().enumerate().skip(window - 1) {
        let start = i + 1 - window;
        *slot = Some(values[start..=i].iter().sum::<f64>() / window as f64);
    }
    out
}

/// Recursive exponential smoothing with factor `alpha`, seeded with the
/// first value: `y[0] = x[0]`, `y[t] = (1 - alpha) * y[t-1] + alpha * x[t]`.
pub fn exponential_smoothing(values: &[f64], alpha: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &value in values {
        let next = match prev {
            None => value,
            Some(p) => (1.0 - alpha) * p + alpha * value,
        };
        out.push(next);
        prev = Some(next);
    }
    out
}

/// Percentage change between consecutive values; `None` when the base is zero
pub fn pct_change(previous: f64, current: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous)
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
