//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::trend::ema;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Macd {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

impl Macd {
    pub fn is_bullish(&self) -> bool {
        self.histogram > 0.0
    }

    pub fn is_bearish(&self) -> bool {
        self.histogram < 0.0
    }
}

/// Calculate MACD line, signal line and histogram from a close series.
///
/// MACD line = EMA(fast) - EMA(slow); signal line = EMA(signal) over the
/// MACD-line history; histogram = MACD - signal. Returns `None` when fewer
/// than `slow + signal` closes are available.
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal: usize) -> Option<Macd> {
    if closes.len() < slow + signal {
        return None;
    }

    let fast_ema = ema(closes, fast);
    let slow_ema = ema(closes, slow);
    let macd_series: Vec<f64> = fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(f, s)| f - s)
        .collect();

    let signal_series = ema(&macd_series, signal);
    let macd_line = *macd_series.last()?;
    let signal_line = *signal_series.last()?;

    Some(Macd {
        macd: macd_line,
        signal: signal_line,
        histogram: macd_line - signal_line,
    })
}

/// MACD with the conventional 12/26/9 parameters.
pub fn macd_default(closes: &[f64]) -> Option<Macd> {
    macd(closes, 12, 26, 9)
}
