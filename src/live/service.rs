use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::api::ResultSource;
use crate::classification::{MarketClassification, ResultProvider};
use crate::db::LabelStore;
use crate::derive::MarketPhase;
use crate::models::{LiveResultInfo, LiveResultRequest, Market};

use super::label::compose_enetpulse_label;

/// Whether a provider should be queried for a market right now.
///
/// Label-caching providers are also queried before the game starts, until a
/// label has been stored for the market.
pub fn fetch_enabled(
    provider: ResultProvider,
    app_ready: bool,
    pending_resolution: bool,
    has_cached_label: bool,
) -> bool {
    if !app_ready {
        return false;
    }

    match provider {
        ResultProvider::Enetpulse | ResultProvider::JsonOdds => {
            pending_resolution || !has_cached_label
        }
        ResultProvider::Generic => pending_resolution,
    }
}

/// Outcome of refreshing one market's live data
#[derive(Debug, Clone, PartialEq)]
pub enum LiveRefresh {
    /// The market's provider is not enabled right now
    Skipped,
    /// The provider had nothing for the game
    NoData,
    Updated {
        live_result: Option<LiveResultInfo>,
        label: Option<String>,
    },
}

/// Fetches live results from the provider matching each market's sport and
/// keeps the tournament label store up to date.
pub struct LiveResultService {
    enetpulse: Arc<dyn ResultSource>,
    json_odds: Arc<dyn ResultSource>,
    generic: Arc<dyn ResultSource>,
    labels: Arc<dyn LabelStore>,
}

impl LiveResultService {
    pub fn new(
        enetpulse: Arc<dyn ResultSource>,
        json_odds: Arc<dyn ResultSource>,
        generic: Arc<dyn ResultSource>,
        labels: Arc<dyn LabelStore>,
    ) -> Self {
        Self {
            enetpulse,
            json_odds,
            generic,
            labels,
        }
    }

    pub fn source_for(&self, provider: ResultProvider) -> &dyn ResultSource {
        match provider {
            ResultProvider::Enetpulse => self.enetpulse.as_ref(),
            ResultProvider::JsonOdds => self.json_odds.as_ref(),
            ResultProvider::Generic => self.generic.as_ref(),
        }
    }

    pub async fn cached_label(&self, market_address: &str) -> Result<Option<String>> {
        self.labels.get(market_address).await
    }

    /// Refresh a market's live data from its provider
    pub async fn refresh(
        &self,
        market: &Market,
        phase: MarketPhase,
        app_ready: bool,
    ) -> Result<LiveRefresh> {
        let classification = MarketClassification::of(market);
        let provider = classification.provider;

        let has_cached_label = if provider.caches_tournament_label() {
            self.labels.contains(&market.address).await?
        } else {
            false
        };

        if !fetch_enabled(
            provider,
            app_ready,
            phase.is_pending_resolution(),
            has_cached_label,
        ) {
            return Ok(LiveRefresh::Skipped);
        }

        let request = LiveResultRequest::for_market(market)?;
        let source = self.source_for(provider);
        let update = match source.fetch(&request).await? {
            Some(update) => update,
            None => {
                debug!(
                    "No {} data yet for market {}",
                    source.provider().as_str(),
                    market.address
                );
                return Ok(LiveRefresh::NoData);
            }
        };

        let (live_result, label) = match provider {
            ResultProvider::Enetpulse => {
                let label = update
                    .live_result
                    .as_ref()
                    .map(|info| compose_enetpulse_label(info, classification.one_sided));
                (update.live_result, label)
            }
            ResultProvider::JsonOdds => (None, update.tournament_name),
            ResultProvider::Generic => (update.live_result, None),
        };

        let label = label.filter(|label| !label.is_empty());
        if let Some(label) = &label {
            self.labels.put(&market.address, label).await?;
            info!("Tournament label for {}: {}", market.address, label);
        }

        Ok(LiveRefresh::Updated { live_result, label })
    }
}
