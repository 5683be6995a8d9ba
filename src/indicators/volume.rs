//! Volume averages used for confirmation checks.

use crate::models::Candle;

/// Simple mean of volume over the trailing `period` candles.
///
/// Returns 0 with insufficient data; callers must treat 0 as "no
/// confirmation possible" and never divide by it.
pub fn average_volume(candles: &[Candle], period: usize) -> f64 {
    if period == 0 || candles.len() < period {
        return 0.0;
    }
    candles[candles.len() - period..]
        .iter()
        .map(|c| c.volume)
        .sum::<f64>()
        / period as f64
}

/// Ratio of the latest candle's volume to the trailing average.
///
/// `None` when the average is unavailable or zero.
pub fn volume_ratio(candles: &[Candle], period: usize) -> Option<f64> {
    let avg = average_volume(candles, period);
    if avg == 0.0 {
        return None;
    }
    candles.last().map(|c| c.volume / avg)
}
