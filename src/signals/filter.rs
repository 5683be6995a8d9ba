//! Quality filter and ranker for candidate signals.
//!
//! Deliberately decoupled from the strategies: evaluators provide a raw
//! opinion, and the filter re-weights it with a market-regime reading (ADX)
//! that is independent of which strategy produced the candidate. A
//! low-conviction strategy firing in a strong trend can therefore outrank a
//! nominally safer one firing in chop.

use crate::models::{RankedSignal, ScoreBreakdown, SignalCandidate};
use tracing::debug;

/// Weights and regime thresholds for the composite quality score. The
/// defaults give trend strength a minority weight against the strategy's
/// own confidence.
#[derive(Debug, Clone, Copy)]
pub struct FilterParams {
    pub trend_weight: f64,
    pub confidence_weight: f64,
    /// ADX at or above this maps to a full-weight trend contribution.
    pub adx_full: f64,
    /// ADX below this contributes nothing.
    pub adx_floor: f64,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            trend_weight: 0.3,
            confidence_weight: 0.7,
            adx_full: 30.0,
            adx_floor: 20.0,
        }
    }
}

/// Composite 0-100 quality score for one candidate.
pub fn quality_score(candidate: &SignalCandidate, params: &FilterParams) -> ScoreBreakdown {
    let adx = candidate.trend_strength.unwrap_or(0.0);
    let trend_score = if adx >= params.adx_full {
        100.0
    } else if adx >= params.adx_floor {
        adx / params.adx_full * 100.0
    } else {
        0.0
    };

    ScoreBreakdown {
        trend_score,
        confidence_score: candidate.confidence,
    }
}

/// Score candidates, drop those under `min_score`, and return survivors
/// sorted by descending score.
///
/// The sort is stable: candidates with equal scores keep the order in which
/// their strategies were registered. That tie-break is documented behavior,
/// not incidental.
pub fn filter_and_rank(
    candidates: Vec<SignalCandidate>,
    min_score: f64,
    params: &FilterParams,
) -> Vec<RankedSignal> {
    let mut ranked: Vec<RankedSignal> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let breakdown = quality_score(&candidate, params);
            let score = (breakdown.trend_score * params.trend_weight
                + breakdown.confidence_score * params.confidence_weight)
                .round();
            if score < min_score {
                debug!(
                    strategy = %candidate.strategy,
                    symbol = %candidate.symbol,
                    score,
                    min_score,
                    "candidate discarded below quality threshold"
                );
                return None;
            }
            Some(RankedSignal {
                candidate,
                score,
                breakdown,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}
