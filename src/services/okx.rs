//! OKX v5 REST market data provider.
//!
//! All requests funnel through a single spacing gate so concurrent scans
//! share one rate-limit budget; 429 responses are retried with backoff.
//! Per the provider contract, every failure is logged and swallowed into an
//! empty result.

use crate::models::{candle::validate_series, Candle, Timeframe};
use crate::services::market_data::MarketData;
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::{TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const THROTTLED: &str = "throttled (429)";

#[derive(Debug, Deserialize)]
struct OkxEnvelope<T> {
    code: String,
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct OkxTicker {
    last: String,
}

#[derive(Debug, Deserialize)]
struct OkxInstrument {
    #[serde(rename = "instId")]
    inst_id: String,
}

pub struct OkxMarketData {
    http: reqwest::Client,
    base_url: String,
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl OkxMarketData {
    pub fn new(base_url: &str, min_interval_ms: u64) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            min_interval: Duration::from_millis(min_interval_ms),
            last_request: Mutex::new(None),
        }
    }

    /// Enforce the minimum spacing between exchange requests. The lock is
    /// held across the sleep so concurrent callers queue behind one gate.
    async fn throttle(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }

    async fn get_once<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<OkxEnvelope<T>, BoxError> {
        self.throttle().await;
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).query(query).send().await?;
        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(THROTTLED.into());
        }
        let response = response.error_for_status()?;
        Ok(response.json::<OkxEnvelope<T>>().await?)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, BoxError> {
        let envelope = (|| self.get_once::<T>(path, query))
            .retry(
                ExponentialBuilder::default()
                    .with_min_delay(Duration::from_secs(2))
                    .with_max_times(1),
            )
            .when(|err: &BoxError| err.to_string() == THROTTLED)
            .notify(|_, delay| {
                warn!(path, delay_ms = delay.as_millis() as u64, "rate limit hit, backing off");
            })
            .await?;

        if envelope.code != "0" {
            return Err(format!("okx error code {}", envelope.code).into());
        }
        Ok(envelope.data)
    }

    fn parse_candles(rows: Vec<Vec<String>>) -> Vec<Candle> {
        let mut candles: Vec<Candle> = rows
            .into_iter()
            .filter_map(|row| {
                let ts_ms: i64 = row.first()?.parse().ok()?;
                let ts = Utc.timestamp_millis_opt(ts_ms).single()?;
                // Column 6 is quote-currency volume; fall back to the
                // contract volume column on older payload shapes.
                let volume = row
                    .get(6)
                    .or_else(|| row.get(5))?
                    .parse()
                    .ok()?;
                Some(Candle::new(
                    ts,
                    row.get(1)?.parse().ok()?,
                    row.get(2)?.parse().ok()?,
                    row.get(3)?.parse().ok()?,
                    row.get(4)?.parse().ok()?,
                    volume,
                ))
            })
            .collect();

        // OKX returns newest-first; the engine wants oldest-first.
        candles.reverse();

        if let Err(err) = validate_series(&candles) {
            warn!(%err, "exchange returned unordered candles, reordering");
            candles.sort_by_key(|c| c.ts);
            candles.dedup_by_key(|c| c.ts);
        }
        candles
    }
}

#[async_trait]
impl MarketData for OkxMarketData {
    async fn candles(&self, symbol: &str, timeframe: Timeframe, limit: usize) -> Vec<Candle> {
        let limit_str = limit.to_string();
        let query = [
            ("instId", symbol),
            ("bar", timeframe.as_bar()),
            ("limit", limit_str.as_str()),
        ];
        match self
            .get::<Vec<String>>("/api/v5/market/candles", &query)
            .await
        {
            Ok(rows) => {
                let candles = Self::parse_candles(rows);
                debug!(symbol, %timeframe, count = candles.len(), "fetched candles");
                candles
            }
            Err(err) => {
                warn!(symbol, %timeframe, %err, "candle fetch failed, returning empty series");
                Vec::new()
            }
        }
    }

    async fn last_price(&self, symbol: &str) -> Option<f64> {
        match self
            .get::<OkxTicker>("/api/v5/market/ticker", &[("instId", symbol)])
            .await
        {
            Ok(tickers) => tickers.first().and_then(|t| t.last.parse().ok()),
            Err(err) => {
                warn!(symbol, %err, "ticker fetch failed");
                None
            }
        }
    }

    async fn instruments(&self) -> Vec<String> {
        match self
            .get::<OkxInstrument>(
                "/api/v5/public/instruments",
                &[("instType", "SWAP"), ("state", "live")],
            )
            .await
        {
            Ok(rows) => {
                let mut symbols: Vec<String> = rows
                    .into_iter()
                    .map(|i| i.inst_id)
                    .filter(|id| {
                        id.contains("USDT") && !id.contains("TEST") && !id.contains("DEMO")
                    })
                    .collect();
                symbols.sort();
                symbols
            }
            Err(err) => {
                warn!(%err, "instrument listing failed");
                Vec::new()
            }
        }
    }
}
