//! Fast momentum entry ("FAST_RSI").
//!
//! 5m timeframe, low lag: an oversold/overbought RSI reading or a fresh
//! 9/21 EMA crossover, gated by a companion "not yet extreme" RSI band so
//! entries are not taken into already-stretched moves.

use crate::indicators::structure::{swing_high, swing_low};
use crate::indicators::trend::ema;
use crate::indicators::{atr, rsi};
use crate::models::{Direction, SignalCandidate, Timeframe};
use crate::strategies::{MarketSnapshot, Strategy};

const MIN_CANDLES: usize = 15;
const RSI_OVERSOLD: f64 = 35.0;
const RSI_OVERBOUGHT: f64 = 65.0;
const ATR_STOP_MULT: f64 = 1.2;
const ATR_TARGET_MULT: f64 = 3.0;
const SWING_LOOKBACK: usize = 15;
const CONFIDENCE_CROSSOVER: f64 = 75.0;
const CONFIDENCE_RSI: f64 = 70.0;

pub struct FastRsi;

impl Strategy for FastRsi {
    fn name(&self) -> &'static str {
        "FAST_RSI"
    }

    fn data_requirements(&self) -> &'static [(Timeframe, usize)] {
        &[(Timeframe::M5, 30)]
    }

    fn evaluate(&self, snapshot: &MarketSnapshot) -> Option<SignalCandidate> {
        let candles = snapshot.candles(Timeframe::M5);
        if candles.len() < MIN_CANDLES {
            return None;
        }

        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let rsi_value = rsi(candles, 14);
        let ema9 = ema(&closes, 9);
        let ema21 = ema(&closes, 21);

        let price = *closes.last()?;
        let last_ema9 = *ema9.last()?;
        let last_ema21 = *ema21.last()?;
        let prev_ema9 = ema9.get(ema9.len().checked_sub(2)?)?;

        let atr_value = atr(candles, 14);
        if atr_value == 0.0 {
            return None;
        }

        let bullish_crossover = *prev_ema9 <= last_ema21 && last_ema9 > last_ema21;
        let rsi_bullish = rsi_value > 30.0 && rsi_value < 50.0;
        if (rsi_value < RSI_OVERSOLD || bullish_crossover) && rsi_bullish {
            let stop =
                swing_low(candles, SWING_LOOKBACK)?.max(price - atr_value * ATR_STOP_MULT);
            let target = price + atr_value * ATR_TARGET_MULT;
            let confidence = if bullish_crossover {
                CONFIDENCE_CROSSOVER
            } else {
                CONFIDENCE_RSI
            };
            return Some(
                SignalCandidate::new(
                    self.name(),
                    &snapshot.symbol,
                    Direction::Long,
                    price,
                    stop,
                    target,
                    confidence,
                )
                .with_reasons(vec![
                    if bullish_crossover {
                        "EMA 9/21 bullish crossover".to_string()
                    } else {
                        format!("RSI oversold at {:.1}", rsi_value)
                    },
                    format!("RSI {:.1} in entry band", rsi_value),
                ]),
            );
        }

        let bearish_crossover = *prev_ema9 >= last_ema21 && last_ema9 < last_ema21;
        let rsi_bearish = rsi_value > 50.0 && rsi_value < 70.0;
        if (rsi_value > RSI_OVERBOUGHT || bearish_crossover) && rsi_bearish {
            let stop =
                swing_high(candles, SWING_LOOKBACK)?.min(price + atr_value * ATR_STOP_MULT);
            let target = price - atr_value * ATR_TARGET_MULT;
            let confidence = if bearish_crossover {
                CONFIDENCE_CROSSOVER
            } else {
                CONFIDENCE_RSI
            };
            return Some(
                SignalCandidate::new(
                    self.name(),
                    &snapshot.symbol,
                    Direction::Short,
                    price,
                    stop,
                    target,
                    confidence,
                )
                .with_reasons(vec![
                    if bearish_crossover {
                        "EMA 9/21 bearish crossover".to_string()
                    } else {
                        format!("RSI overbought at {:.1}", rsi_value)
                    },
                    format!("RSI {:.1} in entry band", rsi_value),
                ]),
            );
        }

        None
    }
}
