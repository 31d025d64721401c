use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

use crate::classification::ResultProvider;
use crate::models::{LiveResultRequest, ProviderUpdate};

use super::{get_json, ResultSource};

/// Client for JSON odds additional data. It only knows the tournament name.
pub struct JsonOddsClient {
    client: Client,
    base_url: String,
}

impl JsonOddsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, request: &LiveResultRequest) -> String {
        format!(
            "{}/json-odds-data/{}/{}",
            self.base_url,
            urlencoding::encode(&request.game_id),
            request.sport_tag
        )
    }
}

#[async_trait]
impl ResultSource for JsonOddsClient {
    fn provider(&self) -> ResultProvider {
        ResultProvider::JsonOdds
    }

    async fn fetch(&self, request: &LiveResultRequest) -> Result<Option<ProviderUpdate>> {
        let tournament: Option<String> =
            get_json(&self.client, &self.url(request), "JSON odds").await?;

        Ok(tournament
            .filter(|name| !name.is_empty())
            .map(|name| ProviderUpdate {
                live_result: None,
                tournament_name: Some(name),
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_has_no_date() {
        let client = JsonOddsClient::new("https://api.example.com");
        let request = LiveResultRequest {
            game_id: "golf-777".into(),
            match_date: "2024-04-11".into(),
            sport_tag: 109121,
        };
        assert_eq!(
            client.url(&request),
            "https://api.example.com/json-odds-data/golf-777/109121"
        );
    }
}
