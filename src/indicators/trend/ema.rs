//! EMA (Exponential Moving Average) indicator

/// Calculate the full EMA sequence for a value series.
///
/// Smoothing constant k = 2 / (period + 1), seeded with the first value so
/// the output is aligned index-for-index with the input.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    if values.is_empty() || period == 0 {
        return Vec::new();
    }

    let k = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    out.push(values[0]);
    for &value in &values[1..] {
        let prev = out[out.len() - 1];
        out.push(value * k + prev * (1.0 - k));
    }
    out
}

/// Latest EMA value, or `None` when the series is shorter than the period.
pub fn ema_last(values: &[f64], period: usize) -> Option<f64> {
    if values.len() < period {
        return None;
    }
    ema(values, period).last().copied()
}
