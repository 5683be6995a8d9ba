//! Unit tests for the CONFLUENCE strategy

use crate::test_utils::candle_at;
use perpscout::models::{Candle, Direction, Timeframe};
use perpscout::strategies::{Confluence, ConfluenceParams, MarketSnapshot, Strategy};

/// A steady 15m uptrend: highs and lows climb every bar, closes zigzag to
/// keep RSI inside the scoring band, and the last bar closes moderately up
/// on elevated volume.
fn confluence_uptrend_candles() -> Vec<Candle> {
    let mut candles: Vec<Candle> = Vec::with_capacity(120);
    let mut prev_close = 0.0;
    for i in 0..120 {
        let low = 100.0 + 0.8 * i as f64;
        let high = low + 5.0;
        let mid = low + 2.5;
        let (close, volume) = if i == 119 {
            (prev_close + 3.5, 2500.0)
        } else {
            let z = if i % 2 == 1 { 1.9 } else { -1.9 };
            (mid + z, 1000.0)
        };
        let open = if i == 0 { mid } else { prev_close };
        candles.push(candle_at(i, open, high, low, close, volume));
        prev_close = close;
    }
    candles
}

fn snapshot(candles: Vec<Candle>) -> MarketSnapshot {
    MarketSnapshot::new("BTC-USDT-SWAP").with_candles(Timeframe::M15, candles)
}

#[test]
fn test_insufficient_data_abstains() {
    let candles = confluence_uptrend_candles()[..80].to_vec();
    assert!(Confluence::default().evaluate(&snapshot(candles)).is_none());
}

#[test]
fn test_low_volume_abstains() {
    let mut candles = confluence_uptrend_candles();
    candles.last_mut().unwrap().volume = 1000.0;
    assert!(Confluence::default().evaluate(&snapshot(candles)).is_none());
}

#[test]
fn test_reward_risk_gate_blocks_thin_targets() {
    // The ATR-sized stop and default target land under the 1.5 minimum
    // reward:risk for this series, so the gate must hold the signal back.
    let candles = confluence_uptrend_candles();
    assert!(Confluence::default().evaluate(&snapshot(candles)).is_none());
}

#[test]
fn test_wider_target_clears_the_gate() {
    let strategy = Confluence::new(ConfluenceParams {
        atr_target_mult: 3.0,
        ..Default::default()
    });
    let signal = strategy
        .evaluate(&snapshot(confluence_uptrend_candles()))
        .unwrap();

    assert_eq!(signal.strategy, "CONFLUENCE");
    assert_eq!(signal.direction, Direction::Long);
    assert!(signal.confidence >= 70.0);
    assert!(signal.confidence <= 95.0);

    let rr = signal.extras["risk_reward"].as_f64().unwrap();
    assert!(rr >= 1.5, "emitted reward:risk {rr} under the minimum");
    let score = signal.extras["score"].as_f64().unwrap();
    assert!(score >= 70.0);
    assert!(!signal.reasons.is_empty());
}
