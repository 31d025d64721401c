use std::env;

use anyhow::{anyhow, Context, Result};

use crate::derive::Layout;
use crate::network::Network;

const DEFAULT_API_URL: &str = "https://api.overtimemarkets.xyz";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Sports markets API URL
    pub markets_api_url: String,

    /// Generic live result API URL
    pub live_result_api_url: String,

    /// Enetpulse game data API URL
    pub enetpulse_api_url: String,

    /// JSON odds additional data API URL
    pub json_odds_api_url: String,

    /// Network whose markets are tracked
    pub network: Network,

    /// Interval in seconds for refreshing markets
    pub market_scan_interval: u64,

    /// Interval in seconds for polling live results
    pub live_result_poll_interval: u64,

    /// SQLite database path for tournament labels
    pub database_url: String,

    /// Card layout to derive
    pub layout: Layout,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let network_id: u64 = env::var("NETWORK_ID")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .context("NETWORK_ID must be a valid number")?;

        Ok(Config {
            markets_api_url: env::var("MARKETS_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),

            live_result_api_url: env::var("LIVE_RESULT_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),

            enetpulse_api_url: env::var("ENETPULSE_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),

            json_odds_api_url: env::var("JSON_ODDS_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),

            network: Network::from_id(network_id).context("NETWORK_ID is not supported")?,

            market_scan_interval: env::var("MARKET_SCAN_INTERVAL")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .context("MARKET_SCAN_INTERVAL must be a valid number")?,

            live_result_poll_interval: env::var("LIVE_RESULT_POLL_INTERVAL")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("LIVE_RESULT_POLL_INTERVAL must be a valid number")?,

            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:data/labels.db".to_string()),

            layout: env::var("LAYOUT")
                .unwrap_or_else(|_| "desktop".to_string())
                .parse()
                .map_err(|e: String| anyhow!(e))
                .context("LAYOUT must be desktop or mobile")?,
        })
    }
}
