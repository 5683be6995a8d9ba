//! Unit tests for the quality filter and ranker

use perpscout::models::{Direction, SignalCandidate};
use perpscout::signals::{filter_and_rank, quality_score, FilterParams};

fn candidate(strategy: &str, confidence: f64, adx: Option<f64>) -> SignalCandidate {
    let mut c = SignalCandidate::new(
        strategy,
        "BTC-USDT-SWAP",
        Direction::Long,
        100.0,
        95.0,
        110.0,
        confidence,
    );
    c.trend_strength = adx;
    c
}

/// Confidence-only weighting, so composite scores equal raw confidence.
fn confidence_only() -> FilterParams {
    FilterParams {
        trend_weight: 0.0,
        confidence_weight: 1.0,
        ..FilterParams::default()
    }
}

#[test]
fn test_strong_trend_scores_full_weight() {
    let breakdown = quality_score(&candidate("A", 75.0, Some(35.0)), &FilterParams::default());
    assert_eq!(breakdown.trend_score, 100.0);
    assert_eq!(breakdown.confidence_score, 75.0);

    let ranked = filter_and_rank(
        vec![candidate("A", 75.0, Some(35.0))],
        0.0,
        &FilterParams::default(),
    );
    // 0.3 * 100 + 0.7 * 75 = 82.5, rounded.
    assert_eq!(ranked[0].score, 83.0);
}

#[test]
fn test_partial_trend_band_scales_linearly() {
    let breakdown = quality_score(&candidate("A", 75.0, Some(25.0)), &FilterParams::default());
    assert!((breakdown.trend_score - 25.0 / 30.0 * 100.0).abs() < 1e-9);

    let ranked = filter_and_rank(
        vec![candidate("A", 75.0, Some(25.0))],
        0.0,
        &FilterParams::default(),
    );
    // 0.3 * 83.33 + 0.7 * 75 = 77.5, rounded.
    assert_eq!(ranked[0].score, 78.0);
}

#[test]
fn test_weak_or_missing_trend_scores_zero() {
    let weak = quality_score(&candidate("A", 75.0, Some(10.0)), &FilterParams::default());
    assert_eq!(weak.trend_score, 0.0);

    let missing = quality_score(&candidate("A", 75.0, None), &FilterParams::default());
    assert_eq!(missing.trend_score, 0.0);
}

#[test]
fn test_threshold_drops_and_orders() {
    let candidates = vec![
        candidate("HIGH", 90.0, None),
        candidate("LOW", 40.0, None),
        candidate("MID", 70.0, None),
    ];
    let ranked = filter_and_rank(candidates, 50.0, &confidence_only());

    let survivors: Vec<(&str, f64)> = ranked
        .iter()
        .map(|r| (r.candidate.strategy.as_str(), r.score))
        .collect();
    assert_eq!(survivors, vec![("HIGH", 90.0), ("MID", 70.0)]);
}

#[test]
fn test_equal_scores_keep_registration_order() {
    let candidates = || {
        vec![
            candidate("FIRST", 70.0, None),
            candidate("SECOND", 70.0, None),
        ]
    };

    for _ in 0..3 {
        let ranked = filter_and_rank(candidates(), 0.0, &confidence_only());
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].candidate.strategy, "FIRST");
        assert_eq!(ranked[1].candidate.strategy, "SECOND");
    }
}
