//! Strategy evaluators: independent, named trading ideas.
//!
//! Each strategy consumes a pre-fetched [`MarketSnapshot`] and returns at
//! most one [`SignalCandidate`] per cycle, abstaining with `None` whenever
//! its data or indicator requirements are not met. The aggregator later
//! treats agreement among strategies as a confidence input, so evaluators
//! stay pure and independent of each other.

pub mod confluence;
pub mod fast_rsi;
pub mod risky_breakout;
pub mod safe_trend;

pub use confluence::{Confluence, ConfluenceParams};
pub use fast_rsi::FastRsi;
pub use risky_breakout::RiskyBreakout;
pub use safe_trend::SafeTrend;

use crate::models::{Candle, SignalCandidate, Timeframe};
use std::collections::HashMap;

/// Immutable multi-timeframe market view for one instrument, assembled by
/// the aggregator before any strategy runs.
#[derive(Debug, Clone, Default)]
pub struct MarketSnapshot {
    pub symbol: String,
    pub candles: HashMap<Timeframe, Vec<Candle>>,
    pub last_price: Option<f64>,
}

impl MarketSnapshot {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            candles: HashMap::new(),
            last_price: None,
        }
    }

    pub fn with_candles(mut self, timeframe: Timeframe, candles: Vec<Candle>) -> Self {
        self.candles.insert(timeframe, candles);
        self
    }

    pub fn with_last_price(mut self, price: f64) -> Self {
        self.last_price = Some(price);
        self
    }

    /// Candle series for a timeframe; empty when never fetched or the fetch
    /// failed closed.
    pub fn candles(&self, timeframe: Timeframe) -> &[Candle] {
        self.candles.get(&timeframe).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Live price if the ticker was available, otherwise the latest close on
    /// the given timeframe.
    pub fn price(&self, timeframe: Timeframe) -> Option<f64> {
        self.last_price
            .or_else(|| self.candles(timeframe).last().map(|c| c.close))
    }
}

/// One independent trading idea.
pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Candle series this strategy needs, as (timeframe, lookback) pairs.
    fn data_requirements(&self) -> &'static [(Timeframe, usize)];

    /// Produce at most one candidate for the snapshot, or abstain.
    fn evaluate(&self, snapshot: &MarketSnapshot) -> Option<SignalCandidate>;
}

/// Ordered registry of strategy evaluators.
///
/// Registration order is preserved all the way through ranking: the quality
/// filter's sort is stable, so equal-scoring candidates surface in the order
/// their strategies were registered here.
pub struct StrategyRegistry {
    strategies: Vec<Box<dyn Strategy>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// The built-in strategy set.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SafeTrend));
        registry.register(Box::new(RiskyBreakout));
        registry.register(Box::new(FastRsi));
        registry.register(Box::new(Confluence::default()));
        registry
    }

    pub fn register(&mut self, strategy: Box<dyn Strategy>) {
        self.strategies.push(strategy);
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Strategy> {
        self.strategies.iter().map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Union of all data requirements: one (timeframe, max lookback) entry
    /// per timeframe, so each series is fetched once per cycle.
    pub fn merged_requirements(&self) -> Vec<(Timeframe, usize)> {
        let mut merged: HashMap<Timeframe, usize> = HashMap::new();
        for strategy in self.iter() {
            for &(timeframe, lookback) in strategy.data_requirements() {
                let entry = merged.entry(timeframe).or_insert(0);
                *entry = (*entry).max(lookback);
            }
        }
        let mut out: Vec<_> = merged.into_iter().collect();
        out.sort_by_key(|(tf, _)| tf.as_bar());
        out
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
