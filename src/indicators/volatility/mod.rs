//! Volatility measures used for stop/target sizing and squeeze detection.

pub mod atr;
pub mod bollinger;

pub use atr::atr;
pub use bollinger::{bollinger, bollinger_default, BollingerBands};
