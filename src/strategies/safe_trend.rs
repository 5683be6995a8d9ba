//! Trend-following entry with volume confirmation ("SAFE_TREND").
//!
//! 1H timeframe. SuperTrend gives the regime, volume above average confirms
//! participation, and an RSI gate avoids chasing exhausted moves.

use crate::indicators::structure::{supertrend_default, swing_high, swing_low, Trend};
use crate::indicators::{atr, average_volume, rsi};
use crate::models::{Direction, SignalCandidate, Timeframe};
use crate::strategies::{MarketSnapshot, Strategy};

const MIN_CANDLES: usize = 50;
const VOLUME_CONFIRMATION: f64 = 1.2;
const VOLUME_PERIOD: usize = 20;
const RSI_LONG_MAX: f64 = 65.0;
const RSI_SHORT_MIN: f64 = 35.0;
const ATR_STOP_MULT: f64 = 1.5;
const ATR_TARGET_MULT: f64 = 3.0;
const SWING_LOOKBACK: usize = 20;
const CONFIDENCE: f64 = 75.0;

pub struct SafeTrend;

impl Strategy for SafeTrend {
    fn name(&self) -> &'static str {
        "SAFE_TREND"
    }

    fn data_requirements(&self) -> &'static [(Timeframe, usize)] {
        &[(Timeframe::H1, 100)]
    }

    fn evaluate(&self, snapshot: &MarketSnapshot) -> Option<SignalCandidate> {
        let candles = snapshot.candles(Timeframe::H1);
        if candles.len() < MIN_CANDLES {
            return None;
        }

        let st = supertrend_default(candles)?;
        let last = candles.last()?;
        let avg_volume = average_volume(candles, VOLUME_PERIOD);
        if avg_volume == 0.0 {
            return None;
        }
        let volume_ok = last.volume > avg_volume * VOLUME_CONFIRMATION;
        let rsi_value = rsi(candles, 14);

        let atr_value = atr(candles, 14);
        if atr_value == 0.0 {
            return None;
        }

        if st.direction == Trend::Up
            && last.close > st.value
            && volume_ok
            && rsi_value < RSI_LONG_MAX
        {
            let stop = swing_low(candles, SWING_LOOKBACK)?
                .max(last.close - atr_value * ATR_STOP_MULT);
            let target = last.close + atr_value * ATR_TARGET_MULT;
            return Some(
                SignalCandidate::new(
                    self.name(),
                    &snapshot.symbol,
                    Direction::Long,
                    last.close,
                    stop,
                    target,
                    CONFIDENCE,
                )
                .with_reasons(vec![
                    "SuperTrend uptrend, price above line".to_string(),
                    format!("volume {:.1}x average", last.volume / avg_volume),
                    format!("RSI {:.1} below exhaustion", rsi_value),
                ]),
            );
        }

        if st.direction == Trend::Down
            && last.close < st.value
            && volume_ok
            && rsi_value > RSI_SHORT_MIN
        {
            let stop = swing_high(candles, SWING_LOOKBACK)?
                .min(last.close + atr_value * ATR_STOP_MULT);
            let target = last.close - atr_value * ATR_TARGET_MULT;
            return Some(
                SignalCandidate::new(
                    self.name(),
                    &snapshot.symbol,
                    Direction::Short,
                    last.close,
                    stop,
                    target,
                    CONFIDENCE,
                )
                .with_reasons(vec![
                    "SuperTrend downtrend, price below line".to_string(),
                    format!("volume {:.1}x average", last.volume / avg_volume),
                    format!("RSI {:.1} above exhaustion", rsi_value),
                ]),
            );
        }

        None
    }
}
