use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, RwLock};
use tokio::time;
use tracing::{error, info, warn};

use crate::api::MarketClient;
use crate::models::{ActiveMarkets, CardUpdate};

/// Worker that periodically refreshes the network's markets
pub struct MarketScannerWorker {
    client: MarketClient,
    network_id: u64,
    active_markets: Arc<RwLock<ActiveMarkets>>,
    update_tx: mpsc::Sender<CardUpdate>,
    scan_interval: Duration,
}

impl MarketScannerWorker {
    /// Create a new market scanner worker
    pub fn new(
        client: MarketClient,
        network_id: u64,
        active_markets: Arc<RwLock<ActiveMarkets>>,
        update_tx: mpsc::Sender<CardUpdate>,
        scan_interval_secs: u64,
    ) -> Self {
        Self {
            client,
            network_id,
            active_markets,
            update_tx,
            scan_interval: Duration::from_secs(scan_interval_secs),
        }
    }

    /// Run the worker loop
    pub async fn run(&self) {
        info!(
            "Market scanner started (network: {}, interval: {:?})",
            self.network_id, self.scan_interval
        );

        // Run initial scan immediately
        self.scan().await;

        let mut interval = time::interval(self.scan_interval);
        interval.tick().await; // Skip first tick (already ran)

        loop {
            interval.tick().await;
            self.scan().await;
        }
    }

    /// Perform a single market scan
    async fn scan(&self) {
        match self.client.fetch_markets(self.network_id).await {
            Ok(markets) => {
                let count = markets.len();

                // Dropped markets get an update too so their cards are removed
                let addresses: HashSet<String> = {
                    let mut active = self.active_markets.write().await;
                    let mut addresses: HashSet<String> = active.keys().cloned().collect();
                    active.clear();
                    for market in markets {
                        addresses.insert(market.address.clone());
                        active.insert(market.address.clone(), market);
                    }
                    addresses
                };

                info!("Market scan complete: {} markets", count);

                for market_address in addresses {
                    if let Err(e) = self.update_tx.send(CardUpdate { market_address }).await {
                        warn!("Failed to send card update: {}", e);
                        return;
                    }
                }
            }
            Err(e) => {
                error!("Failed to scan markets: {}", e);
                warn!("Will retry on next interval");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::serve_once;
    use crate::derive::test_support::market;

    #[tokio::test]
    async fn test_unavailable_api_keeps_active_markets() {
        let url = serve_once("503 Service Unavailable", "").await;
        let active: Arc<RwLock<ActiveMarkets>> = Arc::new(RwLock::new(Default::default()));
        let m = market(9004, 0.5, 0.5);
        active.write().await.insert(m.address.clone(), m.clone());

        let (tx, mut rx) = mpsc::channel(8);
        let scanner = MarketScannerWorker::new(MarketClient::new(&url), 10, Arc::clone(&active), tx, 300);
        scanner.scan().await;

        assert_eq!(active.read().await.len(), 1);
        assert!(active.read().await.contains_key(&m.address));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_scan_notifies_dropped_and_new_markets() {
        let body = r#"[{
            "address": "0xnew",
            "gameId": "0x31",
            "homeTeam": "Lakers",
            "awayTeam": "Celtics",
            "tags": [9004],
            "maturityDate": 1700000000,
            "homeOdds": 0.5,
            "awayOdds": 0.5
        }]"#;
        let url = serve_once("200 OK", body).await;
        let active: Arc<RwLock<ActiveMarkets>> = Arc::new(RwLock::new(Default::default()));
        let old = market(9004, 0.5, 0.5);
        active.write().await.insert(old.address.clone(), old);

        let (tx, mut rx) = mpsc::channel(8);
        let scanner = MarketScannerWorker::new(MarketClient::new(&url), 10, Arc::clone(&active), tx, 300);
        scanner.scan().await;

        let mut notified = Vec::new();
        while let Ok(update) = rx.try_recv() {
            notified.push(update.market_address);
        }
        notified.sort();
        assert_eq!(notified, vec!["0xmarket".to_string(), "0xnew".to_string()]);
        assert_eq!(active.read().await.keys().collect::<Vec<_>>(), vec!["0xnew"]);
    }
}
