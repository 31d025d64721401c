use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

use crate::classification::ResultProvider;
use crate::models::{LiveResultInfo, LiveResultRequest, ProviderUpdate};

use super::{get_json, ResultSource};

/// Client for the generic live result API, keyed by game id only
pub struct LiveResultClient {
    client: Client,
    base_url: String,
}

impl LiveResultClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, request: &LiveResultRequest) -> String {
        format!(
            "{}/live-result/{}",
            self.base_url,
            urlencoding::encode(&request.game_id)
        )
    }
}

#[async_trait]
impl ResultSource for LiveResultClient {
    fn provider(&self) -> ResultProvider {
        ResultProvider::Generic
    }

    async fn fetch(&self, request: &LiveResultRequest) -> Result<Option<ProviderUpdate>> {
        let result: Option<LiveResultInfo> =
            get_json(&self.client, &self.url(request), "live result").await?;

        Ok(result.map(|info| ProviderUpdate {
            live_result: Some(info),
            tournament_name: None,
        }))
    }
}
