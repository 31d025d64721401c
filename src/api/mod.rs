pub mod enetpulse;
pub mod json_odds;
pub mod live_result;
pub mod markets;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::classification::ResultProvider;
use crate::models::{LiveResultRequest, ProviderUpdate};

pub use enetpulse::EnetpulseClient;
pub use json_odds::JsonOddsClient;
pub use live_result::LiveResultClient;
pub use markets::MarketClient;

/// A provider of live results and tournament info for a game
#[async_trait]
pub trait ResultSource: Send + Sync {
    fn provider(&self) -> ResultProvider;

    /// Fetch the provider's data for a game, `None` when it has nothing yet
    async fn fetch(&self, request: &LiveResultRequest) -> Result<Option<ProviderUpdate>>;
}

/// GET a JSON document, mapping 404 to `None`
async fn get_json<T: DeserializeOwned>(client: &Client, url: &str, api: &str) -> Result<Option<T>> {
    debug!("Fetching {}: {}", api, url);

    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .with_context(|| format!("Failed to fetch from {}", api))?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        anyhow::bail!("{} API error: {} - {}", api, status, text);
    }

    let body: T = response
        .json()
        .await
        .with_context(|| format!("Failed to parse {} response", api))?;

    Ok(Some(body))
}

#[cfg(test)]
pub(crate) mod test_support {
    use anyhow::Result;
    use async_trait::async_trait;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::ResultSource;
    use crate::classification::ResultProvider;
    use crate::models::{LiveResultRequest, ProviderUpdate};

    /// Serve one canned HTTP response on a local port, returns the base URL
    pub async fn serve_once(status: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                loop {
                    let n = socket.read(&mut buf).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                    if request.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{}", addr)
    }

    /// Generic provider that never has data
    pub struct EmptySource;

    #[async_trait]
    impl ResultSource for EmptySource {
        fn provider(&self) -> ResultProvider {
            ResultProvider::Generic
        }

        async fn fetch(&self, _request: &LiveResultRequest) -> Result<Option<ProviderUpdate>> {
            Ok(None)
        }
    }
}
