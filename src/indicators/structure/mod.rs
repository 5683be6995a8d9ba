//! Market-structure indicators.

pub mod supertrend;
pub mod swing;

pub use supertrend::{supertrend, supertrend_default, SuperTrend, Trend};
pub use swing::{swing_high, swing_low};
