use std::sync::Arc;

use anyhow::Result;
use tokio::sync::{mpsc, RwLock};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use market_board::api::{EnetpulseClient, JsonOddsClient, LiveResultClient, MarketClient};
use market_board::config::Config;
use market_board::db::SqliteLabelStore;
use market_board::live::LiveResultService;
use market_board::models::{ActiveMarkets, LiveResultCache};
use market_board::workers::{
    CardBoard, CardProcessorWorker, LiveFetcherWorker, MarketScannerWorker,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "market_board=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting market-board");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded (network: {}, layout: {:?})",
        config.network.chain_name(),
        config.layout
    );

    // Initialize label store
    let label_store = Arc::new(SqliteLabelStore::new(&config.database_url).await?);
    info!("Label store initialized");

    // Initialize API clients
    let market_client = MarketClient::new(&config.markets_api_url);
    let live_service = Arc::new(LiveResultService::new(
        Arc::new(EnetpulseClient::new(&config.enetpulse_api_url)),
        Arc::new(JsonOddsClient::new(&config.json_odds_api_url)),
        Arc::new(LiveResultClient::new(&config.live_result_api_url)),
        label_store,
    ));
    info!("API clients initialized");

    // Shared state
    let active_markets: Arc<RwLock<ActiveMarkets>> = Arc::new(RwLock::new(Default::default()));
    let live_results: Arc<RwLock<LiveResultCache>> = Arc::new(RwLock::new(Default::default()));
    let board: Arc<RwLock<CardBoard>> = Arc::new(RwLock::new(Default::default()));

    // Channel for card updates
    let (update_tx, update_rx) = mpsc::channel(256);

    // Create workers
    let market_scanner = MarketScannerWorker::new(
        market_client,
        config.network.id(),
        Arc::clone(&active_markets),
        update_tx.clone(),
        config.market_scan_interval,
    );

    let live_fetcher = LiveFetcherWorker::new(
        Arc::clone(&live_service),
        Arc::clone(&active_markets),
        Arc::clone(&live_results),
        Arc::clone(&board),
        update_tx,
        config.live_result_poll_interval,
    );

    let card_processor = CardProcessorWorker::new(
        Arc::clone(&live_service),
        Arc::clone(&active_markets),
        Arc::clone(&live_results),
        Arc::clone(&board),
        config.layout,
        update_rx,
    );

    info!("Workers created, starting...");

    let scanner_handle = tokio::spawn(async move {
        market_scanner.run().await;
    });

    let fetcher_handle = tokio::spawn(async move {
        live_fetcher.run().await;
    });

    let processor_handle = tokio::spawn(async move {
        card_processor.run().await;
    });

    info!("All workers started");

    // Wait for shutdown signal
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        result = scanner_handle => {
            error!("Market scanner exited unexpectedly: {:?}", result);
        }
        result = fetcher_handle => {
            error!("Live fetcher exited unexpectedly: {:?}", result);
        }
        result = processor_handle => {
            error!("Card processor exited unexpectedly: {:?}", result);
        }
    }

    let cards = board.read().await;
    let hidden = cards.values().filter(|card| card.hidden).count();
    info!(
        "Shutting down market-board ({} cards, {} hidden)",
        cards.len(),
        hidden
    );
    Ok(())
}
