//! Signal evaluation pipeline: aggregation, quality filtering, formatting.

pub mod aggregator;
pub mod filter;
pub mod formatter;

pub use aggregator::SignalEngine;
pub use filter::{filter_and_rank, quality_score, FilterParams};
pub use formatter::format_signal;
