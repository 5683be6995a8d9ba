//! OHLCV candle model and series validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One OHLCV bar for a fixed time bucket, produced by the market data
/// provider as part of an oldest-first series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub ts: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(
        ts: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            ts,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Contract violation in a candle series handed to the engine.
///
/// Indicator math assumes strictly time-ordered, duplicate-free input, so
/// ordering is checked once at the ingestion boundary instead of inside
/// every indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    OutOfOrder { index: usize },
    DuplicateTimestamp { index: usize },
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesError::OutOfOrder { index } => {
                write!(f, "candle series out of order at index {}", index)
            }
            SeriesError::DuplicateTimestamp { index } => {
                write!(f, "duplicate candle timestamp at index {}", index)
            }
        }
    }
}

impl std::error::Error for SeriesError {}

/// Validate that a candle series is strictly time-ordered, oldest-first.
pub fn validate_series(candles: &[Candle]) -> Result<(), SeriesError> {
    for (i, pair) in candles.windows(2).enumerate() {
        if pair[1].ts < pair[0].ts {
            return Err(SeriesError::OutOfOrder { index: i + 1 });
        }
        if pair[1].ts == pair[0].ts {
            return Err(SeriesError::DuplicateTimestamp { index: i + 1 });
        }
    }
    Ok(())
}
