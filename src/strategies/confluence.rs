//! Multi-indicator confluence scorer ("CONFLUENCE").
//!
//! 15m timeframe. Seven independent readings are scored separately for the
//! long and the short hypothesis; a direction is emitted only when its point
//! total reaches the acceptance minimum, strictly beats the opposing side,
//! and the ATR/swing-derived levels give an acceptable reward:risk. The
//! strictest evaluator in the set, with an explicit numeric gate.

use crate::indicators::momentum::{macd_default, stochastic, williams_r};
use crate::indicators::structure::{swing_high, swing_low};
use crate::indicators::volatility::bollinger_default;
use crate::indicators::{atr, ema_last, rsi, volume_ratio};
use crate::models::{Direction, SignalCandidate, Timeframe};
use crate::strategies::{MarketSnapshot, Strategy};
use serde_json::json;

const MIN_CANDLES: usize = 100;

/// Tunable thresholds for the confluence gate. The source of these numbers
/// varied per call site, so they are explicit configuration with documented
/// defaults rather than literals.
#[derive(Debug, Clone, Copy)]
pub struct ConfluenceParams {
    /// Minimum point total (out of 100) a direction must reach.
    pub min_score: f64,
    /// Minimum reward:risk ratio for the derived levels.
    pub min_risk_reward: f64,
    /// Hard precondition on last-candle volume vs the 20-period average.
    pub min_volume_ratio: f64,
    pub atr_stop_mult: f64,
    pub atr_target_mult: f64,
    pub swing_lookback: usize,
    /// Pad applied beyond the swing extreme when it bounds the stop.
    pub swing_pad: f64,
}

impl Default for ConfluenceParams {
    fn default() -> Self {
        Self {
            min_score: 70.0,
            min_risk_reward: 1.5,
            min_volume_ratio: 1.1,
            atr_stop_mult: 1.8,
            atr_target_mult: 2.5,
            swing_lookback: 20,
            swing_pad: 0.001,
        }
    }
}

#[derive(Default)]
pub struct Confluence {
    params: ConfluenceParams,
}

impl Confluence {
    pub fn new(params: ConfluenceParams) -> Self {
        Self { params }
    }
}

impl Strategy for Confluence {
    fn name(&self) -> &'static str {
        "CONFLUENCE"
    }

    fn data_requirements(&self) -> &'static [(Timeframe, usize)] {
        &[(Timeframe::M15, 200)]
    }

    fn evaluate(&self, snapshot: &MarketSnapshot) -> Option<SignalCandidate> {
        let candles = snapshot.candles(Timeframe::M15);
        if candles.len() < MIN_CANDLES {
            return None;
        }
        let price = snapshot.price(Timeframe::M15)?;

        let ratio = volume_ratio(candles, 20)?;
        if ratio < self.params.min_volume_ratio {
            return None;
        }

        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let ema9 = ema_last(&closes, 9)?;
        let ema21 = ema_last(&closes, 21)?;
        let rsi_value = rsi(candles, 14);
        let atr_value = atr(candles, 14);
        if atr_value == 0.0 {
            return None;
        }
        let macd = macd_default(&closes)?;
        let stoch = stochastic(candles, 14, 3)?;
        let bands = bollinger_default(candles)?;
        let williams = williams_r(candles, 14)?;

        let mut long_score = 0.0;
        let mut long_reasons = Vec::new();
        let mut short_score = 0.0;
        let mut short_reasons = Vec::new();

        // EMA alignment (20 points)
        if ema9 > ema21 && price > ema9 {
            long_score += 20.0;
            long_reasons.push("EMA bullish".to_string());
        }
        if ema9 < ema21 && price < ema9 {
            short_score += 20.0;
            short_reasons.push("EMA bearish".to_string());
        }

        // RSI band (15 points, partial credit for the wider band)
        if (45.0..=65.0).contains(&rsi_value) {
            long_score += 15.0;
            long_reasons.push(format!("RSI {:.1}", rsi_value));
        } else if (35.0..=70.0).contains(&rsi_value) {
            long_score += 10.0;
            long_reasons.push(format!("RSI {:.1} (ok)", rsi_value));
        }
        if (35.0..=55.0).contains(&rsi_value) {
            short_score += 15.0;
            short_reasons.push(format!("RSI {:.1}", rsi_value));
        } else if (30.0..=65.0).contains(&rsi_value) {
            short_score += 10.0;
            short_reasons.push(format!("RSI {:.1} (ok)", rsi_value));
        }

        // MACD trend + histogram sign (15 points)
        if macd.is_bullish() {
            long_score += 15.0;
            long_reasons.push("MACD bullish".to_string());
        }
        if macd.is_bearish() {
            short_score += 15.0;
            short_reasons.push("MACD bearish".to_string());
        }

        // Stochastic signal / extremity (10 points, 8 at the extreme)
        if stoch.is_bullish() && !stoch.is_overbought() {
            long_score += 10.0;
            long_reasons.push("Stoch bullish".to_string());
        } else if stoch.is_oversold() {
            long_score += 8.0;
            long_reasons.push("Stoch oversold".to_string());
        }
        if !stoch.is_bullish() && !stoch.is_oversold() {
            short_score += 10.0;
            short_reasons.push("Stoch bearish".to_string());
        } else if stoch.is_overbought() {
            short_score += 8.0;
            short_reasons.push("Stoch overbought".to_string());
        }

        // Bollinger position (10 points)
        let in_band = price >= bands.lower && price <= bands.upper;
        if price < bands.lower || (in_band && price > bands.middle) {
            long_score += 10.0;
            long_reasons.push("BB support".to_string());
        }
        if price > bands.upper || (in_band && price < bands.middle) {
            short_score += 10.0;
            short_reasons.push("BB resistance".to_string());
        }

        // Williams %R signal / extremity (10 points)
        if williams.is_bullish() || williams.is_oversold() {
            long_score += 10.0;
            long_reasons.push("Williams %R".to_string());
        }
        if !williams.is_bullish() || williams.is_overbought() {
            short_score += 10.0;
            short_reasons.push("Williams %R".to_string());
        }

        // Volume ratio (20 points, tiered)
        let volume_points = if ratio >= 2.0 {
            20.0
        } else if ratio >= 1.5 {
            15.0
        } else if ratio >= 1.2 {
            10.0
        } else {
            0.0
        };
        if volume_points > 0.0 {
            long_score += volume_points;
            long_reasons.push(format!("volume {:.1}x", ratio));
            short_score += volume_points;
            short_reasons.push(format!("volume {:.1}x", ratio));
        }

        if long_score >= self.params.min_score && long_score > short_score {
            let support = swing_low(candles, self.params.swing_lookback)?;
            let stop = (support * (1.0 - self.params.swing_pad))
                .max(price - atr_value * self.params.atr_stop_mult);
            let target = price + atr_value * self.params.atr_target_mult;
            return self.emit(
                snapshot,
                Direction::Long,
                price,
                stop,
                target,
                long_score,
                long_reasons,
            );
        }

        if short_score >= self.params.min_score && short_score > long_score {
            let resistance = swing_high(candles, self.params.swing_lookback)?;
            let stop = (resistance * (1.0 + self.params.swing_pad))
                .min(price + atr_value * self.params.atr_stop_mult);
            let target = price - atr_value * self.params.atr_target_mult;
            return self.emit(
                snapshot,
                Direction::Short,
                price,
                stop,
                target,
                short_score,
                short_reasons,
            );
        }

        None
    }
}

impl Confluence {
    #[allow(clippy::too_many_arguments)]
    fn emit(
        &self,
        snapshot: &MarketSnapshot,
        direction: Direction,
        price: f64,
        stop: f64,
        target: f64,
        score: f64,
        reasons: Vec<String>,
    ) -> Option<SignalCandidate> {
        let risk = match direction {
            Direction::Long => price - stop,
            Direction::Short => stop - price,
        };
        // Degenerate stop distance would make the ratio blow up; abstain.
        if risk <= 0.0 {
            return None;
        }
        let reward = match direction {
            Direction::Long => target - price,
            Direction::Short => price - target,
        };
        let risk_reward = reward / risk;
        if risk_reward < self.params.min_risk_reward {
            return None;
        }

        Some(
            SignalCandidate::new(
                self.name(),
                &snapshot.symbol,
                direction,
                price,
                stop,
                target,
                score.min(95.0),
            )
            .with_reasons(reasons)
            .with_extra("score", json!(score))
            .with_extra("risk_reward", json!(risk_reward)),
        )
    }
}
