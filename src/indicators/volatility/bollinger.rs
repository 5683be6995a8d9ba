//! Bollinger Bands indicator

use crate::models::Candle;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl BollingerBands {
    /// Band width as a fraction of the given reference price.
    pub fn bandwidth(&self, price: f64) -> f64 {
        if price == 0.0 {
            return 0.0;
        }
        (self.upper - self.lower) / price
    }
}

/// Calculate Bollinger Bands over the trailing `period` closes.
///
/// Middle = SMA(period); upper/lower = middle +/- `std_dev` population
/// standard deviations. Returns `None` with insufficient data.
pub fn bollinger(candles: &[Candle], period: usize, std_dev: f64) -> Option<BollingerBands> {
    if period == 0 || candles.len() < period {
        return None;
    }

    let closes: Vec<f64> = candles[candles.len() - period..]
        .iter()
        .map(|c| c.close)
        .collect();
    let sma = closes.iter().sum::<f64>() / period as f64;
    let variance = closes.iter().map(|c| (c - sma).powi(2)).sum::<f64>() / period as f64;
    let sigma = variance.sqrt();

    Some(BollingerBands {
        upper: sma + std_dev * sigma,
        middle: sma,
        lower: sma - std_dev * sigma,
    })
}

/// Bollinger Bands with the conventional 20-period / 2-sigma parameters.
pub fn bollinger_default(candles: &[Candle]) -> Option<BollingerBands> {
    bollinger(candles, 20, 2.0)
}
