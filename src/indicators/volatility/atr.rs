//! ATR (Average True Range) indicator

use crate::indicators::trend::true_range;
use crate::models::Candle;

/// Calculate ATR as the simple average of the last `period` true ranges.
///
/// Returns 0 when fewer than `period + 1` candles are available; callers
/// treat 0 as "volatility unavailable" and abstain rather than divide by it
/// or size stops from it.
pub fn atr(candles: &[Candle], period: usize) -> f64 {
    if period == 0 || candles.len() < period + 1 {
        return 0.0;
    }

    let trs: Vec<f64> = candles
        .windows(2)
        .map(|pair| true_range(pair[1].high, pair[1].low, pair[0].close))
        .collect();

    trs[trs.len() - period..].iter().sum::<f64>() / period as f64
}
