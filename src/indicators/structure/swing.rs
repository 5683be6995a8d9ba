//! Swing extremes over a trailing window, used as support/resistance bounds
//! when sizing stop-losses.

use crate::models::Candle;

/// Lowest low over the trailing `lookback` candles.
pub fn swing_low(candles: &[Candle], lookback: usize) -> Option<f64> {
    let window = trailing(candles, lookback)?;
    Some(window.iter().map(|c| c.low).fold(f64::MAX, f64::min))
}

/// Highest high over the trailing `lookback` candles.
pub fn swing_high(candles: &[Candle], lookback: usize) -> Option<f64> {
    let window = trailing(candles, lookback)?;
    Some(window.iter().map(|c| c.high).fold(f64::MIN, f64::max))
}

fn trailing(candles: &[Candle], lookback: usize) -> Option<&[Candle]> {
    if candles.is_empty() || lookback == 0 {
        return None;
    }
    let start = candles.len().saturating_sub(lookback);
    Some(&candles[start..])
}
