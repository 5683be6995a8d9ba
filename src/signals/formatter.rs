//! Deterministic rendering of a ranked signal into notification text.
//!
//! Boundary adapter only: no business logic, and it never fails — missing
//! optional fields render as placeholders.

use crate::models::RankedSignal;
use std::fmt::Write;

/// Render a ranked signal as human-readable multi-line text.
pub fn format_signal(signal: &RankedSignal) -> String {
    let c = &signal.candidate;
    let strategy = if c.strategy.is_empty() {
        "unknown"
    } else {
        c.strategy.as_str()
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "[SIGNAL] {} {} ({})",
        c.direction.as_str(),
        c.symbol,
        strategy
    );
    let _ = writeln!(out, "Entry:       {:.5}", c.entry);
    let _ = writeln!(
        out,
        "Stop loss:   {:.5} (risk {:.2}%)",
        c.stop_loss,
        c.risk_pct() * 100.0
    );
    let _ = writeln!(
        out,
        "Take profit: {:.5} (reward {:.2}%)",
        c.take_profit,
        c.reward_pct() * 100.0
    );
    let _ = writeln!(out, "Quality score: {:.0}/100", signal.score);
    match c.trend_strength {
        Some(adx) => {
            let _ = writeln!(out, "ADX: {:.1}", adx);
        }
        None => {
            let _ = writeln!(out, "ADX: n/a");
        }
    }
    if !c.reasons.is_empty() {
        let _ = writeln!(out, "Reasons: {}", c.reasons.join(" + "));
    }
    out
}
