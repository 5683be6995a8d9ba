//! Open-position bookkeeping shared with the monitoring layer.
//!
//! The scoring core only reads positions: to suppress duplicate entry
//! suggestions and to flag reversal risk against a fresh signal.

use crate::models::signal::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

/// A user-declared position being tracked for monitoring purposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenPosition {
    pub symbol: String,
    pub direction: Direction,
    pub entry: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
}

/// In-memory book of open positions, keyed by symbol.
///
/// One tracked position per symbol; opening over an existing one is
/// rejected so the chat layer can tell the user to close first.
#[derive(Debug, Default)]
pub struct PositionBook {
    positions: RwLock<HashMap<String, OpenPosition>>,
}

impl PositionBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self, position: OpenPosition) -> Result<(), OpenPosition> {
        let mut book = self.positions.write().expect("position book poisoned");
        let key = position.symbol.trim().to_uppercase();
        if let Some(existing) = book.get(&key) {
            return Err(existing.clone());
        }
        book.insert(key, position);
        Ok(())
    }

    pub fn close(&self, symbol: &str) -> Option<OpenPosition> {
        let mut book = self.positions.write().expect("position book poisoned");
        book.remove(&symbol.trim().to_uppercase())
    }

    pub fn get(&self, symbol: &str) -> Option<OpenPosition> {
        let book = self.positions.read().expect("position book poisoned");
        book.get(&symbol.trim().to_uppercase()).cloned()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    pub fn all(&self) -> Vec<OpenPosition> {
        let book = self.positions.read().expect("position book poisoned");
        book.values().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        let book = self.positions.read().expect("position book poisoned");
        book.is_empty()
    }
}
