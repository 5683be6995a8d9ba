//! External collaborators consumed by the engine.

pub mod market_data;
pub mod okx;

pub use market_data::MarketData;
pub use okx::OkxMarketData;
