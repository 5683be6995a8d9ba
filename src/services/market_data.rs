//! Market data provider interface.

use crate::models::{Candle, Timeframe};
use async_trait::async_trait;

/// Read-only market data source for the scoring engine.
///
/// Every method fails closed: transport problems become an empty series or
/// `None`, never an error — strategies already tolerate short and empty
/// input, so nothing downstream has to special-case the exchange being
/// unreachable.
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Historical candles, oldest-first.
    async fn candles(&self, symbol: &str, timeframe: Timeframe, limit: usize) -> Vec<Candle>;

    /// Latest traded price.
    async fn last_price(&self, symbol: &str) -> Option<f64>;

    /// All tradeable instrument identifiers.
    async fn instruments(&self) -> Vec<String>;
}
