//! Environment-backed configuration with in-code defaults.

use std::env;

pub const DEFAULT_QUALITY_THRESHOLD: f64 = 45.0;

/// Deployment environment name, used to pick the log format.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Minimum acceptance score for the quality filter.
///
/// Read from `QUALITY_THRESHOLD_AUTO` on every call rather than cached, so
/// operators can retune the bar without restarting the scanner.
pub fn quality_threshold() -> f64 {
    env::var("QUALITY_THRESHOLD_AUTO")
        .ok()
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(DEFAULT_QUALITY_THRESHOLD)
}

/// Static process configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Instruments to scan; empty means "discover from the exchange".
    pub symbols: Vec<String>,
    /// Upper bound on instruments evaluated concurrently.
    pub scan_concurrency: usize,
    pub okx_base_url: String,
    /// Minimum spacing between exchange requests, in milliseconds.
    pub min_request_interval_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        let symbols = env::var("SCAN_SYMBOLS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_uppercase())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            symbols,
            scan_concurrency: env::var("SCAN_CONCURRENCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4),
            okx_base_url: env::var("OKX_BASE_URL")
                .unwrap_or_else(|_| "https://www.okx.com".to_string()),
            min_request_interval_ms: env::var("OKX_MIN_REQUEST_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbols: Vec::new(),
            scan_concurrency: 4,
            okx_base_url: "https://www.okx.com".to_string(),
            min_request_interval_ms: 100,
        }
    }
}
