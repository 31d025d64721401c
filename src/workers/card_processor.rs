use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, RwLock};
use tracing::{debug, info, warn};

use crate::derive::{Layout, MarketCardState, StatusPanel, ViewContext};
use crate::live::LiveResultService;
use crate::models::{ActiveMarkets, CardUpdate, LiveResultCache};

/// Latest derived card per market address
pub type CardBoard = HashMap<String, MarketCardState>;

/// Worker that derives card state whenever a market's inputs change
pub struct CardProcessorWorker {
    service: Arc<LiveResultService>,
    active_markets: Arc<RwLock<ActiveMarkets>>,
    live_results: Arc<RwLock<LiveResultCache>>,
    board: Arc<RwLock<CardBoard>>,
    layout: Layout,
    update_rx: mpsc::Receiver<CardUpdate>,
}

impl CardProcessorWorker {
    /// Create a new card processor worker
    pub fn new(
        service: Arc<LiveResultService>,
        active_markets: Arc<RwLock<ActiveMarkets>>,
        live_results: Arc<RwLock<LiveResultCache>>,
        board: Arc<RwLock<CardBoard>>,
        layout: Layout,
        update_rx: mpsc::Receiver<CardUpdate>,
    ) -> Self {
        Self {
            service,
            active_markets,
            live_results,
            board,
            layout,
            update_rx,
        }
    }

    /// Run the worker loop
    pub async fn run(mut self) {
        info!("Card processor started (layout: {:?})", self.layout);

        while let Some(update) = self.update_rx.recv().await {
            self.process_update(update).await;
        }

        warn!("Card processor channel closed");
    }

    async fn process_update(&self, update: CardUpdate) {
        let market = match self.active_markets.read().await.get(&update.market_address) {
            Some(m) => m.clone(),
            None => {
                debug!(
                    "Market {} no longer active, dropping its card",
                    update.market_address
                );
                self.board.write().await.remove(&update.market_address);
                self.live_results.write().await.remove(&update.market_address);
                return;
            }
        };

        let live_result = self
            .live_results
            .read()
            .await
            .get(&market.address)
            .cloned();

        let label = match self.service.cached_label(&market.address).await {
            Ok(label) => label,
            Err(e) => {
                warn!("Failed to read label for {}: {:#}", market.address, e);
                None
            }
        };

        let card = MarketCardState::derive(
            &market,
            &ViewContext::new(self.layout),
            live_result.as_ref(),
            label.as_deref(),
        );

        if card.hidden {
            debug!("Hiding {} ({}): no valid odds", card.title, card.address);
        } else {
            info!(
                "Card | {} | {} | phase: {} | markets: {} | {}",
                card.address,
                card.title,
                card.phase.as_str(),
                card.total_markets,
                panel_summary(&card.panel),
            );
        }

        self.board.write().await.insert(card.address.clone(), card);
    }
}

fn panel_summary(panel: &StatusPanel) -> String {
    match panel {
        StatusPanel::Odds => "odds".to_string(),
        StatusPanel::MatchStatus(status) => format!("status: {:?}", status),
        StatusPanel::FinalResult(result) => format!("result: {}", result),
    }
}
