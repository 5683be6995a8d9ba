//! Trend-direction and trend-strength indicators.

pub mod adx;
pub mod ema;

pub use adx::{adx, true_range};
pub use ema::{ema, ema_last};
