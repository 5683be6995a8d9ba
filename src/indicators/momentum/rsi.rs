//! RSI (Relative Strength Index) indicator

use crate::models::Candle;

/// Calculate RSI with Wilder's smoothing.
///
/// Initial average gain/loss from the first `period` deltas, then
/// `avg = (avg * (period - 1) + delta) / period` over the rest. Returns the
/// neutral value 50 when fewer than `period + 1` candles are available, so
/// callers never have to special-case short input.
pub fn rsi(candles: &[Candle], period: usize) -> f64 {
    if period == 0 || candles.len() < period + 1 {
        return 50.0;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for i in 1..=period {
        let diff = candles[i].close - candles[i - 1].close;
        if diff >= 0.0 {
            gains += diff;
        } else {
            losses -= diff;
        }
    }

    let mut avg_gain = gains / period as f64;
    let mut avg_loss = losses / period as f64;

    for i in (period + 1)..candles.len() {
        let diff = candles[i].close - candles[i - 1].close;
        if diff >= 0.0 {
            avg_gain = (avg_gain * (period as f64 - 1.0) + diff) / period as f64;
            avg_loss = (avg_loss * (period as f64 - 1.0)) / period as f64;
        } else {
            avg_gain = (avg_gain * (period as f64 - 1.0)) / period as f64;
            avg_loss = (avg_loss * (period as f64 - 1.0) - diff) / period as f64;
        }
    }

    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

/// Wilder RSI as a full series, one value per candle from index `period`.
///
/// Used by the stochastic-RSI normalization, which needs the history rather
/// than just the latest reading.
pub fn rsi_series(candles: &[Candle], period: usize) -> Vec<f64> {
    if period == 0 || candles.len() < period + 1 {
        return Vec::new();
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for i in 1..=period {
        let diff = candles[i].close - candles[i - 1].close;
        if diff >= 0.0 {
            gains += diff;
        } else {
            losses -= diff;
        }
    }

    let mut avg_gain = gains / period as f64;
    let mut avg_loss = losses / period as f64;
    let mut out = Vec::with_capacity(candles.len() - period);
    out.push(rsi_from_averages(avg_gain, avg_loss));

    for i in (period + 1)..candles.len() {
        let diff = candles[i].close - candles[i - 1].close;
        if diff >= 0.0 {
            avg_gain = (avg_gain * (period as f64 - 1.0) + diff) / period as f64;
            avg_loss = (avg_loss * (period as f64 - 1.0)) / period as f64;
        } else {
            avg_gain = (avg_gain * (period as f64 - 1.0)) / period as f64;
            avg_loss = (avg_loss * (period as f64 - 1.0) - diff) / period as f64;
        }
        out.push(rsi_from_averages(avg_gain, avg_loss));
    }
    out
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}
