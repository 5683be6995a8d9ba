//! Multi-instrument scan with a bounded concurrency budget.
//!
//! Every component below the scanner is a pure function over its candle
//! input, so instruments evaluate in parallel without synchronization; the
//! only shared resource is the provider's rate-limit gate. Cancellation is
//! checked between instruments, not mid-evaluation.

use crate::models::{PositionBook, RankedSignal};
use crate::signals::SignalEngine;
use futures_util::stream::{self, StreamExt};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

pub struct Scanner {
    engine: Arc<SignalEngine>,
    positions: Option<Arc<PositionBook>>,
    concurrency: usize,
    abort: Arc<AtomicBool>,
}

impl Scanner {
    pub fn new(engine: Arc<SignalEngine>, concurrency: usize) -> Self {
        Self {
            engine,
            positions: None,
            concurrency: concurrency.max(1),
            abort: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Suppress entry suggestions for instruments that already have an open
    /// position in the given book.
    pub fn with_position_book(mut self, positions: Arc<PositionBook>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Shared flag that aborts the scan between instruments when set.
    pub fn abort_flag(&self) -> Arc<AtomicBool> {
        self.abort.clone()
    }

    /// Evaluate all instruments and return the surviving signals sorted by
    /// descending quality score.
    pub async fn scan(&self, symbols: &[String]) -> Vec<RankedSignal> {
        info!(count = symbols.len(), "scan started");

        let results: Vec<Option<RankedSignal>> = stream::iter(symbols)
            .map(|symbol| {
                let engine = self.engine.clone();
                let positions = self.positions.clone();
                let abort = self.abort.clone();
                async move {
                    if abort.load(Ordering::Relaxed) {
                        return None;
                    }
                    if let Some(book) = positions {
                        if book.contains(symbol) {
                            debug!(symbol = %symbol, "skipped, position already open");
                            return None;
                        }
                    }
                    engine.evaluate_instrument(symbol).await
                }
            })
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        let mut signals: Vec<RankedSignal> = results.into_iter().flatten().collect();
        signals.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        info!(
            found = signals.len(),
            aborted = self.abort.load(Ordering::Relaxed),
            "scan finished"
        );
        signals
    }
}
