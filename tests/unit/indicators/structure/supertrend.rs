//! Unit tests for the SuperTrend indicator

use crate::test_utils::{candle_at, flat_candles, trending_candles};
use perpscout::indicators::structure::supertrend_default;
use perpscout::indicators::{supertrend, Trend};

#[test]
fn test_supertrend_insufficient_data() {
    let candles = flat_candles(10, 100.0);
    assert!(supertrend(&candles, 10, 3.0).is_none());
}

#[test]
fn test_supertrend_uptrend() {
    let candles = trending_candles(50);
    let st = supertrend_default(&candles).unwrap();
    assert_eq!(st.direction, Trend::Up);
    // In an uptrend the active band is the lower one, below price.
    assert!(st.value < candles.last().unwrap().close);
}

#[test]
fn test_supertrend_downtrend() {
    let candles: Vec<_> = (0..50)
        .map(|i| {
            let high = 300.0 - 0.8 * i as f64;
            let low = high - 4.0;
            candle_at(i, high, high, low, low + 0.5, 1000.0)
        })
        .collect();
    let st = supertrend_default(&candles).unwrap();
    assert_eq!(st.direction, Trend::Down);
    assert!(st.value > candles.last().unwrap().close);
}

#[test]
fn test_supertrend_breakout_above_upper_band() {
    // Ten near-flat bars, then a bar that closes clear of the upper band.
    let mut candles: Vec<_> = (0..12)
        .map(|i| candle_at(i, 100.0, 100.005, 99.995, 100.0, 1000.0))
        .collect();
    candles.push(candle_at(12, 100.0, 110.0, 100.0, 110.0, 1000.0));
    let st = supertrend_default(&candles).unwrap();
    assert_eq!(st.direction, Trend::Up);
    assert!(st.value < 110.0);
}
