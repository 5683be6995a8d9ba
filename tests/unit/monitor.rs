//! Unit tests for the position monitor

use crate::test_utils::{trending_candles, CannedProvider};
use perpscout::models::{Direction, OpenPosition, PositionBook, Timeframe};
use perpscout::monitor::{PositionAlert, PositionMonitor};
use perpscout::signals::SignalEngine;
use std::sync::Arc;

fn monitor_with(provider: CannedProvider, position: Option<OpenPosition>) -> PositionMonitor {
    let engine = Arc::new(SignalEngine::new(Arc::new(provider)));
    let book = Arc::new(PositionBook::new());
    if let Some(position) = position {
        book.open(position).unwrap();
    }
    PositionMonitor::new(engine, book)
}

fn long_position() -> OpenPosition {
    OpenPosition {
        symbol: "BTC-USDT-SWAP".to_string(),
        direction: Direction::Long,
        entry: 100.0,
        stop_loss: 90.0,
        take_profit: 110.0,
    }
}

#[test]
fn test_no_positions_no_alerts() {
    tokio_test::block_on(async {
        let monitor = monitor_with(CannedProvider::new(), None);
        assert!(monitor.check().await.is_empty());
    });
}

#[tokio::test]
async fn test_missing_price_skips_position() {
    // Provider has no ticker: nothing to compare levels against.
    let monitor = monitor_with(CannedProvider::new(), Some(long_position()));
    assert!(monitor.check().await.is_empty());
}

#[tokio::test]
async fn test_take_profit_alert() {
    let provider = CannedProvider::new().with_last_price(115.0);
    let monitor = monitor_with(provider, Some(long_position()));

    let alerts = monitor.check().await;
    assert_eq!(alerts.len(), 1);
    assert!(matches!(
        &alerts[0],
        PositionAlert::TakeProfitHit { price, .. } if *price == 115.0
    ));
}

#[tokio::test]
async fn test_stop_loss_alert() {
    let provider = CannedProvider::new().with_last_price(85.0);
    let monitor = monitor_with(provider, Some(long_position()));

    let alerts = monitor.check().await;
    assert_eq!(alerts.len(), 1);
    assert!(matches!(&alerts[0], PositionAlert::StopLossHit { .. }));
}

#[tokio::test]
async fn test_reversal_risk_for_opposing_signal() {
    // Short position, levels far away, but the trending market makes the
    // engine call LONG on the same instrument.
    let provider = CannedProvider::new()
        .with_candles(Timeframe::H1, trending_candles(100))
        .with_last_price(150.0);
    let position = OpenPosition {
        symbol: "BTC-USDT-SWAP".to_string(),
        direction: Direction::Short,
        entry: 180.0,
        stop_loss: 100_000.0,
        take_profit: 1.0,
    };
    let monitor = monitor_with(provider, Some(position));

    let alerts = monitor.check().await;
    assert_eq!(alerts.len(), 1);
    match &alerts[0] {
        PositionAlert::ReversalRisk { signal, .. } => {
            assert_eq!(signal.candidate.direction, Direction::Long);
        }
        other => panic!("expected reversal alert, got {other:?}"),
    }
}
