//! Pure technical-indicator functions over ordered candle series.
//!
//! Every function is deterministic and side-effect free. Short input never
//! panics: each indicator signals "unavailable" through a documented
//! sentinel (0, 50, or `None`) so strategies can cheaply abstain.

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use momentum::{macd, rsi, stoch_rsi, stochastic, williams_r, Macd, StochRsi, Stochastic, WilliamsR};
pub use structure::{supertrend, swing_high, swing_low, SuperTrend, Trend};
pub use trend::{adx, ema, ema_last, true_range};
pub use volatility::{atr, bollinger, BollingerBands};
pub use volume::{average_volume, volume_ratio};
