use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use market_board::api::{EnetpulseClient, JsonOddsClient, LiveResultClient, MarketClient};
use market_board::config::Config;
use market_board::db::SqliteLabelStore;
use market_board::derive::{Layout, MarketCardState, MarketPhase, ViewContext};
use market_board::live::{LiveRefresh, LiveResultService};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inspect_market=info,market_board=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse arguments
    let args: Vec<String> = env::args().collect();
    let address = args
        .get(1)
        .filter(|a| !a.starts_with("--"))
        .context("Usage: inspect_market <market-address> [--mobile] [--expanded]")?
        .clone();
    let layout = if args.iter().any(|a| a == "--mobile") {
        Layout::Mobile
    } else {
        Layout::Desktop
    };
    let expanded = args.iter().any(|a| a == "--expanded");

    let config = Config::from_env()?;
    let client = MarketClient::new(&config.markets_api_url);

    let market = client
        .fetch_market(&address, config.network.id())
        .await?
        .with_context(|| {
            format!(
                "Market {} not found on {}",
                address,
                config.network.chain_name()
            )
        })?;
    info!("Loaded market {} vs {}", market.home_team, market.away_team);

    let labels = Arc::new(SqliteLabelStore::new(&config.database_url).await?);
    let service = LiveResultService::new(
        Arc::new(EnetpulseClient::new(&config.enetpulse_api_url)),
        Arc::new(JsonOddsClient::new(&config.json_odds_api_url)),
        Arc::new(LiveResultClient::new(&config.live_result_api_url)),
        labels,
    );

    let now = Utc::now();
    let live_result = match service
        .refresh(&market, MarketPhase::of(&market, now), true)
        .await
    {
        Ok(LiveRefresh::Updated { live_result, .. }) => live_result,
        Ok(_) => None,
        Err(e) => {
            warn!("Live data unavailable: {:#}", e);
            None
        }
    };
    let label = service.cached_label(&market.address).await?;

    let ctx = ViewContext {
        now,
        layout,
        expanded,
    };
    let card = MarketCardState::derive(&market, &ctx, live_result.as_ref(), label.as_deref());

    println!("{}", serde_json::to_string_pretty(&card)?);
    Ok(())
}
