//! Shared test helpers: candle series builders and a canned provider.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use perpscout::models::{Candle, Timeframe};
use perpscout::services::MarketData;
use std::collections::HashMap;

pub fn candle_at(index: usize, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Candle {
    let ts = Utc
        .timestamp_opt(1_700_000_000 + index as i64 * 60, 0)
        .unwrap();
    Candle::new(ts, open, high, low, close, volume)
}

/// Identical OHLCV bars: zero range, zero volatility.
pub fn flat_candles(count: usize, price: f64) -> Vec<Candle> {
    (0..count)
        .map(|i| candle_at(i, price, price, price, price, 1000.0))
        .collect()
}

/// Rangebound bars around 100 with a 0.2% total range and constant volume.
pub fn sideways_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| candle_at(i, 100.0, 100.1, 99.9, 100.0, 1000.0))
        .collect()
}

/// A directional uptrend: highs and lows both climb every bar, closes
/// zigzag inside the bar so momentum readings stay off their extremes, and
/// the final bar closes strong on elevated volume.
pub fn trending_candles(count: usize) -> Vec<Candle> {
    let mut candles = Vec::with_capacity(count);
    for i in 0..count {
        let low = 100.0 + 0.8 * i as f64;
        let high = low + 4.0;
        let mid = low + 2.0;
        let z = if i % 2 == 1 { 1.9 } else { -1.9 };
        let close = mid + z;
        let open = mid - z;
        let volume = if i == count - 1 { 2500.0 } else { 1000.0 };
        candles.push(candle_at(i, open, high, low, close, volume));
    }
    candles
}

/// In-memory [`MarketData`] with one canned series per timeframe. Honors
/// `limit` by returning the series tail, like a real exchange would.
#[derive(Default)]
pub struct CannedProvider {
    candles: HashMap<Timeframe, Vec<Candle>>,
    last_price: Option<f64>,
}

impl CannedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candles(mut self, timeframe: Timeframe, candles: Vec<Candle>) -> Self {
        self.candles.insert(timeframe, candles);
        self
    }

    pub fn with_last_price(mut self, price: f64) -> Self {
        self.last_price = Some(price);
        self
    }
}

#[async_trait]
impl MarketData for CannedProvider {
    async fn candles(&self, _symbol: &str, timeframe: Timeframe, limit: usize) -> Vec<Candle> {
        let series = self.candles.get(&timeframe).cloned().unwrap_or_default();
        let start = series.len().saturating_sub(limit);
        series[start..].to_vec()
    }

    async fn last_price(&self, _symbol: &str) -> Option<f64> {
        self.last_price
    }

    async fn instruments(&self) -> Vec<String> {
        vec!["BTC-USDT-SWAP".to_string()]
    }
}
