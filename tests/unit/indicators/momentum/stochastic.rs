//! Unit tests for the stochastic oscillators

use crate::test_utils::{candle_at, flat_candles, trending_candles};
use perpscout::indicators::{stoch_rsi, stochastic};

#[test]
fn test_stochastic_insufficient_data() {
    let candles = flat_candles(13, 100.0);
    assert!(stochastic(&candles, 14, 3).is_none());
}

#[test]
fn test_stochastic_close_at_window_high() {
    // Rising bars closing on their highs pin %K to the ceiling.
    let candles: Vec<_> = (0..20)
        .map(|i| {
            let low = 100.0 + i as f64;
            let high = low + 1.0;
            candle_at(i, low, high, low, high, 1000.0)
        })
        .collect();
    let stoch = stochastic(&candles, 14, 3).unwrap();
    assert_eq!(stoch.k, 100.0);
    assert!(stoch.is_overbought());
}

#[test]
fn test_stochastic_flat_window_reads_midpoint() {
    let candles = flat_candles(20, 100.0);
    let stoch = stochastic(&candles, 14, 3).unwrap();
    assert_eq!(stoch.k, 50.0);
    assert_eq!(stoch.d, 50.0);
    assert!(!stoch.is_bullish());
}

#[test]
fn test_stoch_rsi_insufficient_data() {
    let candles = flat_candles(20, 100.0);
    assert!(stoch_rsi(&candles, 14, 14, 3, 3).is_none());
}

#[test]
fn test_stoch_rsi_bounded() {
    let candles = trending_candles(100);
    let reading = stoch_rsi(&candles, 14, 14, 3, 3).unwrap();
    assert!((0.0..=100.0).contains(&reading.k));
    assert!((0.0..=100.0).contains(&reading.d));
    assert!((0.0..=100.0).contains(&reading.prev_k));
}

#[test]
fn test_stoch_rsi_deterministic() {
    let candles = trending_candles(100);
    assert_eq!(
        stoch_rsi(&candles, 14, 14, 3, 3),
        stoch_rsi(&candles, 14, 14, 3, 3)
    );
}
