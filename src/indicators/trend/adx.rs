//! ADX (Average Directional Index) indicator

use crate::models::Candle;

/// Calculate ADX, the Wilder-smoothed average of the directional index.
///
/// Measures trend strength irrespective of direction, 0-100. Returns 0 when
/// fewer than `2 * period` candles are available; callers treat 0 as
/// "no trend reading".
pub fn adx(candles: &[Candle], period: usize) -> f64 {
    if period == 0 || candles.len() < period * 2 {
        return 0.0;
    }

    let mut trs = Vec::with_capacity(candles.len() - 1);
    let mut plus_dm = Vec::with_capacity(candles.len() - 1);
    let mut minus_dm = Vec::with_capacity(candles.len() - 1);

    for pair in candles.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        trs.push(true_range(curr.high, curr.low, prev.close));

        let up_move = curr.high - prev.high;
        let down_move = prev.low - curr.low;
        plus_dm.push(if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        });
        minus_dm.push(if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        });
    }

    let smoothed_tr = wilder_smooth(&trs, period);
    let smoothed_plus = wilder_smooth(&plus_dm, period);
    let smoothed_minus = wilder_smooth(&minus_dm, period);

    let mut dx = Vec::with_capacity(smoothed_tr.len());
    for i in 0..smoothed_tr.len() {
        let (plus_di, minus_di) = if smoothed_tr[i] > 0.0 {
            (
                100.0 * smoothed_plus[i] / smoothed_tr[i],
                100.0 * smoothed_minus[i] / smoothed_tr[i],
            )
        } else {
            (0.0, 0.0)
        };
        let di_sum = plus_di + minus_di;
        dx.push(if di_sum > 0.0 {
            100.0 * (plus_di - minus_di).abs() / di_sum
        } else {
            0.0
        });
    }

    // ADX is the DX series smoothed over another full period. Near the
    // 2*period minimum the tail is shorter than one period, so fall back to
    // its plain average.
    let tail = &dx[period.saturating_sub(1).min(dx.len())..];
    if tail.is_empty() {
        return 0.0;
    }
    if tail.len() >= period {
        wilder_smooth(tail, period).last().copied().unwrap_or(0.0)
    } else {
        tail.iter().sum::<f64>() / tail.len() as f64
    }
}

/// True range of one candle against the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}

/// Wilder smoothing: seed with the mean of the first `period` values, then
/// `next = (prev * (period - 1) + value) / period`.
fn wilder_smooth(values: &[f64], period: usize) -> Vec<f64> {
    if values.len() < period || period == 0 {
        return Vec::new();
    }
    let seed = values[..period].iter().sum::<f64>() / period as f64;
    let mut out = Vec::with_capacity(values.len() - period + 1);
    out.push(seed);
    for &value in &values[period..] {
        let prev = out[out.len() - 1];
        out.push((prev * (period as f64 - 1.0) + value) / period as f64);
    }
    out
}
