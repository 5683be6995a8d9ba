//! Read-only monitoring of user-declared open positions.
//!
//! Compares the live price and a fresh engine evaluation against each
//! position's stored levels and direction, and emits alerts. It never
//! mutates the position book; acting on an alert is the chat layer's job.

use crate::models::{OpenPosition, PositionBook, RankedSignal};
use crate::signals::SignalEngine;
use std::sync::Arc;
use tracing::{debug, info};

/// Something the notification layer should tell the user about a position.
#[derive(Debug, Clone)]
pub enum PositionAlert {
    TakeProfitHit {
        position: OpenPosition,
        price: f64,
    },
    StopLossHit {
        position: OpenPosition,
        price: f64,
    },
    /// A fresh signal points the other way on an instrument with an open
    /// position.
    ReversalRisk {
        position: OpenPosition,
        signal: RankedSignal,
        price: f64,
    },
}

pub struct PositionMonitor {
    engine: Arc<SignalEngine>,
    positions: Arc<PositionBook>,
}

impl PositionMonitor {
    pub fn new(engine: Arc<SignalEngine>, positions: Arc<PositionBook>) -> Self {
        Self { engine, positions }
    }

    /// Check every open position once and collect alerts.
    pub async fn check(&self) -> Vec<PositionAlert> {
        let open = self.positions.all();
        if open.is_empty() {
            return Vec::new();
        }
        info!(count = open.len(), "monitoring open positions");

        let mut alerts = Vec::new();
        for position in open {
            let Some(price) = self.engine.provider().last_price(&position.symbol).await
            else {
                debug!(symbol = %position.symbol, "no live price, skipping position");
                continue;
            };

            if level_hit(&position, price, position.take_profit, true) {
                alerts.push(PositionAlert::TakeProfitHit { position, price });
                continue;
            }
            if level_hit(&position, price, position.stop_loss, false) {
                alerts.push(PositionAlert::StopLossHit { position, price });
                continue;
            }

            if let Some(signal) = self.engine.evaluate_instrument(&position.symbol).await {
                if signal.candidate.direction.opposes(position.direction) {
                    alerts.push(PositionAlert::ReversalRisk {
                        position,
                        signal,
                        price,
                    });
                }
            }
        }
        alerts
    }
}

/// Whether `price` has reached `level` in the position's favorable
/// (`toward_profit`) or adverse direction.
fn level_hit(position: &OpenPosition, price: f64, level: f64, toward_profit: bool) -> bool {
    use crate::models::Direction;
    let above = price >= level;
    match (position.direction, toward_profit) {
        (Direction::Long, true) | (Direction::Short, false) => above,
        (Direction::Long, false) | (Direction::Short, true) => price <= level,
    }
}
