//! Signal aggregation: run every registered strategy for one instrument,
//! attach a trend-strength reading, then filter and rank the candidates.
//!
//! The two stages are deliberately separate: "does any strategy see an
//! opportunity" and "is that opportunity good enough to surface" are tuned
//! independently.

use crate::config::quality_threshold;
use crate::indicators::adx;
use crate::models::{RankedSignal, SignalCandidate, Timeframe};
use crate::services::MarketData;
use crate::signals::filter::{filter_and_rank, FilterParams};
use crate::strategies::{MarketSnapshot, StrategyRegistry};
use std::sync::Arc;
use tracing::{debug, info};

/// Reference timeframe and depth for the trend-strength (ADX) attachment.
const ADX_TIMEFRAME: Timeframe = Timeframe::H1;
const ADX_LOOKBACK: usize = 50;
const ADX_PERIOD: usize = 14;

pub struct SignalEngine {
    provider: Arc<dyn MarketData>,
    registry: StrategyRegistry,
    filter: FilterParams,
}

impl SignalEngine {
    pub fn new(provider: Arc<dyn MarketData>) -> Self {
        Self::with_registry(provider, StrategyRegistry::with_defaults())
    }

    pub fn with_registry(provider: Arc<dyn MarketData>, registry: StrategyRegistry) -> Self {
        Self {
            provider,
            registry,
            filter: FilterParams::default(),
        }
    }

    pub fn with_filter_params(mut self, filter: FilterParams) -> Self {
        self.filter = filter;
        self
    }

    pub fn provider(&self) -> &Arc<dyn MarketData> {
        &self.provider
    }

    /// Evaluate one instrument end to end. Returns the best surviving
    /// candidate, or `None` when no strategy fires or none clears the
    /// quality threshold.
    pub async fn evaluate_instrument(&self, symbol: &str) -> Option<RankedSignal> {
        let snapshot = self.build_snapshot(symbol).await;
        let mut candidates = self.run_strategies(&snapshot);
        if candidates.is_empty() {
            debug!(symbol, "no strategy produced a candidate");
            return None;
        }

        let trend_strength = self.trend_strength(symbol).await;
        for candidate in &mut candidates {
            candidate.trend_strength = Some(trend_strength);
        }

        // Threshold is re-read on every call so it can be retuned live.
        let min_score = quality_threshold();
        let ranked = filter_and_rank(candidates, min_score, &self.filter);
        let best = ranked.into_iter().next();
        if let Some(signal) = &best {
            info!(
                symbol,
                strategy = %signal.candidate.strategy,
                direction = signal.candidate.direction.as_str(),
                score = signal.score,
                "signal selected"
            );
        }
        best
    }

    /// Run every registered strategy against a pre-built snapshot.
    pub fn run_strategies(&self, snapshot: &MarketSnapshot) -> Vec<SignalCandidate> {
        let mut candidates = Vec::new();
        for strategy in self.registry.iter() {
            if let Some(candidate) = strategy.evaluate(snapshot) {
                debug!(
                    symbol = %snapshot.symbol,
                    strategy = strategy.name(),
                    direction = candidate.direction.as_str(),
                    "strategy produced candidate"
                );
                candidates.push(candidate);
            }
        }
        candidates
    }

    /// Fetch each required series once per (timeframe, max lookback) pair.
    async fn build_snapshot(&self, symbol: &str) -> MarketSnapshot {
        let mut snapshot = MarketSnapshot::new(symbol);
        for (timeframe, lookback) in self.registry.merged_requirements() {
            let candles = self.provider.candles(symbol, timeframe, lookback).await;
            snapshot = snapshot.with_candles(timeframe, candles);
        }
        if let Some(price) = self.provider.last_price(symbol).await {
            snapshot = snapshot.with_last_price(price);
        }
        snapshot
    }

    /// ADX on the reference timeframe. A failed fetch or short series yields
    /// 0 (no trend reading), never an error.
    async fn trend_strength(&self, symbol: &str) -> f64 {
        let candles = self
            .provider
            .candles(symbol, ADX_TIMEFRAME, ADX_LOOKBACK)
            .await;
        adx(&candles, ADX_PERIOD)
    }
}
