//! Volatility breakout out of a squeeze ("RISKY_BREAKOUT").
//!
//! 5m timeframe. A tight consolidation plus a compressed Bollinger band,
//! broken on a volume spike, trades the expansion in the breakout direction.

use crate::indicators::structure::{swing_high, swing_low};
use crate::indicators::volatility::bollinger_default;
use crate::indicators::{atr, average_volume};
use crate::models::{Direction, SignalCandidate, Timeframe};
use crate::strategies::{MarketSnapshot, Strategy};

const MIN_CANDLES: usize = 21;
const CONSOLIDATION_CANDLES: usize = 10;
const CONSOLIDATION_MAX_RANGE: f64 = 0.005;
const MAX_BANDWIDTH: f64 = 0.02;
const VOLUME_SPIKE: f64 = 2.0;
const VOLUME_PERIOD: usize = 10;
const ATR_STOP_MULT: f64 = 1.0;
const ATR_TARGET_MULT: f64 = 3.0;
const SWING_LOOKBACK: usize = 20;
const CONFIDENCE: f64 = 70.0;

pub struct RiskyBreakout;

impl Strategy for RiskyBreakout {
    fn name(&self) -> &'static str {
        "RISKY_BREAKOUT"
    }

    fn data_requirements(&self) -> &'static [(Timeframe, usize)] {
        &[(Timeframe::M5, 30)]
    }

    fn evaluate(&self, snapshot: &MarketSnapshot) -> Option<SignalCandidate> {
        let candles = snapshot.candles(Timeframe::M5);
        if candles.len() < MIN_CANDLES {
            return None;
        }

        let last = candles.last()?;
        let bands = bollinger_default(candles)?;
        let avg_volume = average_volume(candles, VOLUME_PERIOD);
        if avg_volume == 0.0 {
            return None;
        }

        // Consolidation is judged on the candles before the breakout candle;
        // the breakout bar itself is expected to break the tight range.
        let prior = &candles[candles.len() - 1 - CONSOLIDATION_CANDLES..candles.len() - 1];
        let consolidating = prior
            .iter()
            .all(|c| c.close > 0.0 && (c.high - c.low) / c.close <= CONSOLIDATION_MAX_RANGE);
        let squeeze = bands.bandwidth(last.close) < MAX_BANDWIDTH;
        let volume_spike = last.volume > avg_volume * VOLUME_SPIKE;
        if !(consolidating && squeeze && volume_spike) {
            return None;
        }

        let atr_value = atr(candles, 14);
        if atr_value == 0.0 {
            return None;
        }

        if last.close > bands.upper {
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
                    "breakout above upper Bollinger band".to_string(),
                    format!("volume spike {:.1}x average", last.volume / avg_volume),
                    "squeeze after consolidation".to_string(),
                ]),
            );
        }

        if last.close < bands.lower {
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
                    "breakdown below lower Bollinger band".to_string(),
                    format!("volume spike {:.1}x average", last.volume / avg_volume),
                    "squeeze after consolidation".to_string(),
                ]),
            );
        }

        None
    }
}
