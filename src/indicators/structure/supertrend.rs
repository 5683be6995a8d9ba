//! SuperTrend indicator

use crate::indicators::trend::true_range;
use crate::models::Candle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperTrend {
    /// The active band: lower band in an uptrend, upper band in a downtrend.
    pub value: f64,
    pub direction: Trend,
}

/// Calculate SuperTrend from an ATR band around the latest candle midpoint.
///
/// Direction follows the conventional rule: up when the close clears the
/// upper band, down when it breaks the lower band, otherwise decided by the
/// close's side of the midpoint. Returns `None` with insufficient data.
pub fn supertrend(candles: &[Candle], period: usize, multiplier: f64) -> Option<SuperTrend> {
    if period == 0 || candles.len() < period + 1 {
        return None;
    }

    let trs: Vec<f64> = candles
        .windows(2)
        .map(|pair| true_range(pair[1].high, pair[1].low, pair[0].close))
        .collect();
    let atr = trs[trs.len() - period..].iter().sum::<f64>() / period as f64;

    let last = candles.last()?;
    let hl2 = (last.high + last.low) / 2.0;
    let upper_band = hl2 + multiplier * atr;
    let lower_band = hl2 - multiplier * atr;

    let direction = if last.close > upper_band {
        Trend::Up
    } else if last.close < lower_band {
        Trend::Down
    } else if last.close > hl2 {
        Trend::Up
    } else {
        Trend::Down
    };

    let value = match direction {
        Trend::Up => lower_band,
        Trend::Down => upper_band,
    };

    Some(SuperTrend { value, direction })
}

/// SuperTrend with the conventional 10-period / 3x parameters.
pub fn supertrend_default(candles: &[Candle]) -> Option<SuperTrend> {
    supertrend(candles, 10, 3.0)
}
