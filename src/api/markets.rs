use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, info};

use crate::models::Market;

use super::get_json;

/// Client for the sports markets API
pub struct MarketClient {
    client: Client,
    base_url: String,
}

impl MarketClient {
    /// Create a new markets client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch all open and recently resolved markets on a network
    pub async fn fetch_markets(&self, network_id: u64) -> Result<Vec<Market>> {
        let url = format!("{}/markets?networkId={}", self.base_url, network_id);
        debug!("Fetching markets from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to fetch markets")?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("Markets API error: {} - {}", status, text);
        }

        let markets: Vec<Market> = response
            .json()
            .await
            .context("Failed to parse markets response")?;

        info!("Fetched {} markets on network {}", markets.len(), network_id);
        Ok(markets)
    }

    /// Fetch a single market by address
    pub async fn fetch_market(&self, address: &str, network_id: u64) -> Result<Option<Market>> {
        let url = format!(
            "{}/markets/{}?networkId={}",
            self.base_url,
            urlencoding::encode(address),
            network_id
        );

        get_json(&self.client, &url, "Markets").await
    }
}
