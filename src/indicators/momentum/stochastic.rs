//! Stochastic %K/%D and Stochastic-RSI oscillators

use crate::indicators::momentum::rsi::rsi_series;
use crate::models::Candle;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stochastic {
    pub k: f64,
    pub d: f64,
}

impl Stochastic {
    pub fn is_oversold(&self) -> bool {
        self.k < 20.0
    }

    pub fn is_overbought(&self) -> bool {
        self.k > 80.0
    }

    pub fn is_bullish(&self) -> bool {
        self.k > self.d
    }
}

/// Stochastic %K with an SMA-smoothed %D.
///
/// %K is the position of the latest close within the high/low range of the
/// trailing `k_period` window. A zero-range window collapses to the 50
/// midpoint rather than dividing by zero.
pub fn stochastic(candles: &[Candle], k_period: usize, d_period: usize) -> Option<Stochastic> {
    if k_period == 0 || d_period == 0 || candles.len() < k_period {
        return None;
    }

    let k = window_k(&candles[candles.len() - k_period..]);

    let mut k_values = Vec::with_capacity(d_period);
    let start = candles.len().saturating_sub(d_period);
    for i in start..candles.len() {
        if i + 1 >= k_period {
            k_values.push(window_k(&candles[i + 1 - k_period..=i]));
        }
    }
    let d = if k_values.is_empty() {
        k
    } else {
        k_values.iter().sum::<f64>() / k_values.len() as f64
    };

    Some(Stochastic { k, d })
}

fn window_k(window: &[Candle]) -> f64 {
    let highest = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    let lowest = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);
    let close = window[window.len() - 1].close;
    if highest == lowest {
        return 50.0;
    }
    (close - lowest) / (highest - lowest) * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StochRsi {
    pub k: f64,
    pub d: f64,
    pub prev_k: f64,
    pub prev_d: f64,
}

impl StochRsi {
    pub fn bullish_cross(&self) -> bool {
        self.prev_k <= self.prev_d && self.k > self.d
    }

    pub fn bearish_cross(&self) -> bool {
        self.prev_k >= self.prev_d && self.k < self.d
    }
}

/// Stochastic-RSI: RSI series min-max normalized over `stoch_period`, then
/// smoothed twice (K, then D). Returns `None` whenever any stage lacks the
/// two points needed for a current and previous reading.
pub fn stoch_rsi(
    candles: &[Candle],
    rsi_period: usize,
    stoch_period: usize,
    k_period: usize,
    d_period: usize,
) -> Option<StochRsi> {
    if candles.len() < rsi_period + stoch_period || stoch_period == 0 {
        return None;
    }

    let rsi_values = rsi_series(candles, rsi_period);
    if rsi_values.len() < stoch_period {
        return None;
    }

    let mut raw_k = Vec::with_capacity(rsi_values.len() - stoch_period + 1);
    for i in (stoch_period - 1)..rsi_values.len() {
        let window = &rsi_values[i + 1 - stoch_period..=i];
        let highest = window.iter().copied().fold(f64::MIN, f64::max);
        let lowest = window.iter().copied().fold(f64::MAX, f64::min);
        let k = if highest == lowest {
            100.0
        } else {
            (rsi_values[i] - lowest) / (highest - lowest) * 100.0
        };
        raw_k.push(k);
    }

    let smooth_k = sma_series(&raw_k, k_period);
    let smooth_d = sma_series(&smooth_k, d_period);
    if smooth_k.len() < 2 || smooth_d.len() < 2 {
        return None;
    }

    Some(StochRsi {
        k: smooth_k[smooth_k.len() - 1],
        d: smooth_d[smooth_d.len() - 1],
        prev_k: smooth_k[smooth_k.len() - 2],
        prev_d: smooth_d[smooth_d.len() - 2],
    })
}

fn sma_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }
    values
        .windows(period)
        .map(|w| w.iter().sum::<f64>() / period as f64)
        .collect()
}
