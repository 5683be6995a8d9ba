//! Shared data models spanning the engine layers.

pub mod candle;
pub mod position;
pub mod signal;

pub use candle::{validate_series, Candle, SeriesError};
pub use position::{OpenPosition, PositionBook};
pub use signal::{Direction, RankedSignal, ScoreBreakdown, SignalCandidate};

use serde::{Deserialize, Serialize};

/// Candle bucket sizes the engine works with, in OKX bar notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    M5,
    M15,
    H1,
    D1,
}

impl Timeframe {
    pub fn as_bar(&self) -> &'static str {
        match self {
            Timeframe::M5 => "5m",
            Timeframe::M15 => "15m",
            Timeframe::H1 => "1H",
            Timeframe::D1 => "1D",
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_bar())
    }
}
