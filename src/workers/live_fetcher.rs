use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{mpsc, RwLock};
use tokio::time;
use tracing::{debug, info, warn};

use crate::derive::MarketPhase;
use crate::live::{LiveRefresh, LiveResultService};
use crate::models::{ActiveMarkets, CardUpdate, LiveResultCache};
use crate::workers::CardBoard;

/// Worker that refreshes live results and tournament labels for active markets
pub struct LiveFetcherWorker {
    service: Arc<LiveResultService>,
    active_markets: Arc<RwLock<ActiveMarkets>>,
    live_results: Arc<RwLock<LiveResultCache>>,
    board: Arc<RwLock<CardBoard>>,
    update_tx: mpsc::Sender<CardUpdate>,
    poll_interval: Duration,
}

impl LiveFetcherWorker {
    /// Create a new live fetcher worker
    pub fn new(
        service: Arc<LiveResultService>,
        active_markets: Arc<RwLock<ActiveMarkets>>,
        live_results: Arc<RwLock<LiveResultCache>>,
        board: Arc<RwLock<CardBoard>>,
        update_tx: mpsc::Sender<CardUpdate>,
        poll_interval_secs: u64,
    ) -> Self {
        Self {
            service,
            active_markets,
            live_results,
            board,
            update_tx,
            poll_interval: Duration::from_secs(poll_interval_secs),
        }
    }

    /// Run the worker loop
    pub async fn run(&self) {
        info!("Live fetcher started (interval: {:?})", self.poll_interval);

        let mut interval = time::interval(self.poll_interval);

        loop {
            interval.tick().await;
            self.fetch().await;
        }
    }

    /// Perform a single fetch cycle
    async fn fetch(&self) {
        // Snapshot so the lock isn't held across provider calls
        let markets: Vec<_> = self.active_markets.read().await.values().cloned().collect();
        if markets.is_empty() {
            debug!("No active markets, skipping live data fetch");
            return;
        }

        let now = Utc::now();
        let mut updated = 0;

        for market in &markets {
            let phase = MarketPhase::of(market, now);
            // A game can cross maturity with no provider data, the card still has to move on
            let phase_changed = self
                .board
                .read()
                .await
                .get(&market.address)
                .is_some_and(|card| card.phase != phase);

            let live_result = match self.service.refresh(market, phase, true).await {
                Ok(LiveRefresh::Updated { live_result, .. }) => Some(live_result),
                Ok(LiveRefresh::Skipped) | Ok(LiveRefresh::NoData) => None,
                Err(e) => {
                    warn!("Failed to refresh live data for {}: {:#}", market.address, e);
                    None
                }
            };

            let Some(live_result) = live_result else {
                if phase_changed && !self.notify(&market.address).await {
                    return;
                }
                continue;
            };

            if let Some(info) = live_result {
                self.live_results
                    .write()
                    .await
                    .insert(market.address.clone(), info);
            }

            updated += 1;
            if !self.notify(&market.address).await {
                return;
            }
        }

        debug!("Live data refreshed for {}/{} markets", updated, markets.len());
    }

    /// Ask the card processor to re-derive a card, false once the channel is closed
    async fn notify(&self, market_address: &str) -> bool {
        let update = CardUpdate {
            market_address: market_address.to_string(),
        };
        if let Err(e) = self.update_tx.send(update).await {
            warn!("Failed to send card update: {}", e);
            return false;
        }
        true
    }
}
