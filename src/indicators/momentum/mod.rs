//! Momentum oscillators.

pub mod macd;
pub mod rsi;
pub mod stochastic;
pub mod williams;

pub use macd::{macd, macd_default, Macd};
pub use rsi::{rsi, rsi_series};
pub use stochastic::{stoch_rsi, stochastic, StochRsi, Stochastic};
pub use williams::{williams_r, WilliamsR};
