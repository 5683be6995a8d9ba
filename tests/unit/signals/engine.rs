//! Unit tests for the signal engine

use crate::test_utils::{trending_candles, CannedProvider};
use perpscout::models::{Direction, Timeframe};
use perpscout::signals::SignalEngine;
use perpscout::strategies::MarketSnapshot;
use std::sync::Arc;

#[tokio::test]
async fn test_uptrend_selects_the_trend_strategy() {
    let provider = CannedProvider::new().with_candles(Timeframe::H1, trending_candles(100));
    let engine = SignalEngine::new(Arc::new(provider));

    let signal = engine.evaluate_instrument("BTC-USDT-SWAP").await.unwrap();
    assert_eq!(signal.candidate.strategy, "SAFE_TREND");
    assert_eq!(signal.candidate.direction, Direction::Long);
    assert_eq!(signal.candidate.symbol, "BTC-USDT-SWAP");

    // The aggregator attaches the 1H ADX reading before ranking.
    let adx = signal.candidate.trend_strength.unwrap();
    assert!(adx > 30.0, "expected strong trend reading, got {adx}");
    assert!(signal.score >= 45.0);
}

#[tokio::test]
async fn test_empty_provider_yields_none() {
    let engine = SignalEngine::new(Arc::new(CannedProvider::new()));
    assert!(engine.evaluate_instrument("BTC-USDT-SWAP").await.is_none());
}

#[tokio::test]
async fn test_run_strategies_on_empty_snapshot() {
    let engine = SignalEngine::new(Arc::new(CannedProvider::new()));
    let candidates = engine.run_strategies(&MarketSnapshot::new("BTC-USDT-SWAP"));
    assert!(candidates.is_empty());
}
