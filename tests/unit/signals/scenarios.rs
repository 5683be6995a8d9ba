//! End-to-end market scenarios through the full scoring pipeline

use crate::test_utils::{flat_candles, sideways_candles, trending_candles, CannedProvider};
use perpscout::models::Timeframe;
use perpscout::signals::{format_signal, SignalEngine};
use perpscout::strategies::MarketSnapshot;
use std::sync::Arc;

#[tokio::test]
async fn test_every_strategy_abstains_on_a_bare_series() {
    // Five identical candles satisfy no strategy's minimum lookback.
    let series = flat_candles(5, 100.0);
    let snapshot = MarketSnapshot::new("BTC-USDT-SWAP")
        .with_candles(Timeframe::M5, series.clone())
        .with_candles(Timeframe::M15, series.clone())
        .with_candles(Timeframe::H1, series);

    let engine = SignalEngine::new(Arc::new(CannedProvider::new()));
    assert!(engine.run_strategies(&snapshot).is_empty());
}

#[tokio::test]
async fn test_sideways_market_produces_no_signal() {
    // Rangebound on every timeframe: each evaluator must abstain rather
    // than manufacture a direction.
    let provider = CannedProvider::new()
        .with_candles(Timeframe::M5, sideways_candles(30))
        .with_candles(Timeframe::M15, sideways_candles(30))
        .with_candles(Timeframe::H1, sideways_candles(30));
    let engine = SignalEngine::new(Arc::new(provider));

    assert!(engine.evaluate_instrument("BTC-USDT-SWAP").await.is_none());
}

#[tokio::test]
async fn test_trending_market_levels_are_ordered() {
    let provider = CannedProvider::new().with_candles(Timeframe::H1, trending_candles(100));
    let engine = SignalEngine::new(Arc::new(provider));

    let signal = engine.evaluate_instrument("BTC-USDT-SWAP").await.unwrap();
    let c = &signal.candidate;
    assert!(c.take_profit > c.entry);
    assert!(c.entry > c.stop_loss);
    assert!(c.risk_pct() > 0.0);
    assert!(c.reward_pct() > c.risk_pct());
}

#[tokio::test]
async fn test_selected_signal_formats_cleanly() {
    let provider = CannedProvider::new().with_candles(Timeframe::H1, trending_candles(100));
    let engine = SignalEngine::new(Arc::new(provider));

    let signal = engine.evaluate_instrument("BTC-USDT-SWAP").await.unwrap();
    let text = format_signal(&signal);
    assert!(text.contains("LONG BTC-USDT-SWAP"));
    assert!(text.contains("SAFE_TREND"));
    assert!(text.contains("ADX:"));
}
