//! Williams %R oscillator

use crate::models::Candle;

/// Williams %R reading, a negative-valued oscillator in [-100, 0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WilliamsR {
    pub value: f64,
}

impl WilliamsR {
    pub fn is_oversold(&self) -> bool {
        self.value < -80.0
    }

    pub fn is_overbought(&self) -> bool {
        self.value > -20.0
    }

    pub fn is_bullish(&self) -> bool {
        self.value > -50.0
    }
}

/// Calculate Williams %R over the trailing `period` window.
///
/// Inverse-scaled %K: -100 at the window low, 0 at the window high. A
/// zero-range window collapses to the -50 midpoint.
pub fn williams_r(candles: &[Candle], period: usize) -> Option<WilliamsR> {
    if period == 0 || candles.len() < period {
        return None;
    }

    let window = &candles[candles.len() - period..];
    let highest = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    let lowest = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);
    let close = window[window.len() - 1].close;

    let value = if highest == lowest {
        -50.0
    } else {
        (highest - close) / (highest - lowest) * -100.0
    };

    Some(WilliamsR { value })
}
