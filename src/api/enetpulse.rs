use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

use crate::classification::ResultProvider;
use crate::models::{LiveResultInfo, LiveResultRequest, ProviderUpdate};

use super::{get_json, ResultSource};

/// Client for Enetpulse game data (live result plus tournament name and round)
pub struct EnetpulseClient {
    client: Client,
    base_url: String,
}

impl EnetpulseClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, request: &LiveResultRequest) -> String {
        format!(
            "{}/enetpulse-result/{}/{}/{}",
            self.base_url,
            urlencoding::encode(&request.game_id),
            request.match_date,
            request.sport_tag
        )
    }
}

#[async_trait]
impl ResultSource for EnetpulseClient {
    fn provider(&self) -> ResultProvider {
        ResultProvider::Enetpulse
    }

    async fn fetch(&self, request: &LiveResultRequest) -> Result<Option<ProviderUpdate>> {
        let result: Option<LiveResultInfo> =
            get_json(&self.client, &self.url(request), "Enetpulse").await?;

        Ok(result.map(|info| ProviderUpdate {
            tournament_name: info.tournament_name.clone(),
            live_result: Some(info),
        }))
    }
}
