//! Futures signal-generation engine: candles in, ranked trade signals out.
//!
//! The pipeline turns OHLCV candle series into a classified trade signal
//! with entry, stop-loss, take-profit and a composite quality score:
//! indicator library -> strategy evaluators -> aggregator -> quality
//! filter -> formatter. Market data arrives through the [`services`]
//! boundary, which fails closed; everything inside the pipeline is pure
//! computation over its inputs.

pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod monitor;
pub mod scanner;
pub mod services;
pub mod signals;
pub mod strategies;

pub use models::{Candle, Direction, OpenPosition, PositionBook, RankedSignal, SignalCandidate, Timeframe};
pub use scanner::Scanner;
pub use services::{MarketData, OkxMarketData};
pub use signals::{format_signal, SignalEngine};
pub use strategies::{MarketSnapshot, Strategy, StrategyRegistry};
