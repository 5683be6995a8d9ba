//! Signal value objects flowing through the scoring pipeline.
//!
//! Abstention is expressed as `Option::None` at every stage, so a candidate
//! that exists always carries a full set of trade levels.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Directional call of a candidate or ranked signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Long => "LONG",
            Direction::Short => "SHORT",
        }
    }

    pub fn opposes(&self, other: Direction) -> bool {
        *self != other
    }
}

/// A single strategy's opinion on one instrument for one evaluation cycle.
///
/// Created fresh every cycle and discarded afterwards. The only mutation a
/// candidate ever sees is the aggregator attaching `trend_strength`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalCandidate {
    pub strategy: String,
    pub symbol: String,
    pub direction: Direction,
    pub entry: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    /// Strategy self-reported confidence, 0-100.
    pub confidence: f64,
    /// ADX on the reference timeframe, attached by the aggregator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_strength: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub reasons: Vec<String>,
    /// Strategy-specific metadata bag (risk:reward, indicator readings, ...).
    #[serde(skip_serializing_if = "Map::is_empty", default)]
    pub extras: Map<String, Value>,
}

impl SignalCandidate {
    pub fn new(
        strategy: &str,
        symbol: &str,
        direction: Direction,
        entry: f64,
        stop_loss: f64,
        take_profit: f64,
        confidence: f64,
    ) -> Self {
        Self {
            strategy: strategy.to_string(),
            symbol: symbol.to_string(),
            direction,
            entry,
            stop_loss,
            take_profit,
            confidence,
            trend_strength: None,
            reasons: Vec::new(),
            extras: Map::new(),
        }
    }

    pub fn with_reasons(mut self, reasons: Vec<String>) -> Self {
        self.reasons = reasons;
        self
    }

    pub fn with_extra(mut self, key: &str, value: Value) -> Self {
        self.extras.insert(key.to_string(), value);
        self
    }

    /// Risk distance from entry to stop, as a fraction of entry.
    pub fn risk_pct(&self) -> f64 {
        if self.entry == 0.0 {
            return 0.0;
        }
        ((self.entry - self.stop_loss) / self.entry).abs()
    }

    /// Reward distance from entry to target, as a fraction of entry.
    pub fn reward_pct(&self) -> f64 {
        if self.entry == 0.0 {
            return 0.0;
        }
        ((self.take_profit - self.entry) / self.entry).abs()
    }
}

/// How the quality score of a ranked signal was composed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub trend_score: f64,
    pub confidence_score: f64,
}

/// A candidate that survived quality filtering, with its composite score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedSignal {
    pub candidate: SignalCandidate,
    /// Composite quality score, 0-100.
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}
