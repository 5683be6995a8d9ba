use perpscout::config::Config;
use perpscout::logging::init_logging;
use perpscout::scanner::Scanner;
use perpscout::services::{MarketData, OkxMarketData};
use perpscout::signals::{format_signal, SignalEngine};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = Config::from_env();
    let provider: Arc<dyn MarketData> = Arc::new(OkxMarketData::new(
        &config.okx_base_url,
        config.min_request_interval_ms,
    ));

    let symbols = if config.symbols.is_empty() {
        provider.instruments().await
    } else {
        config.symbols.clone()
    };
    if symbols.is_empty() {
        warn!("no instruments to scan");
        return Ok(());
    }

    let engine = Arc::new(SignalEngine::new(provider));
    let scanner = Scanner::new(engine, config.scan_concurrency);

    let abort = scanner.abort_flag();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received, aborting scan after current instruments");
            abort.store(true, Ordering::Relaxed);
        }
    });

    let signals = scanner.scan(&symbols).await;
    info!(count = signals.len(), "scan complete");
    for signal in &signals {
        println!("{}", format_signal(signal));
    }

    Ok(())
}
