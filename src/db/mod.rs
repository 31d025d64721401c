//! Persisted tournament labels, keyed by market address.
//!
//! Labels never expire; an entry lives until it is overwritten or removed.

pub mod labels;
pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

pub use labels::SqliteLabelStore;
pub use memory::MemoryLabelStore;

#[async_trait]
pub trait LabelStore: Send + Sync {
    /// Label stored for a market, if any
    async fn get(&self, market_address: &str) -> Result<Option<String>>;

    /// Store or replace the label for a market
    async fn put(&self, market_address: &str, label: &str) -> Result<()>;

    async fn remove(&self, market_address: &str) -> Result<()>;

    /// Whether a non-empty label is stored for the market
    async fn contains(&self, market_address: &str) -> Result<bool> {
        Ok(self
            .get(market_address)
            .await?
            .is_some_and(|label| !label.is_empty()))
    }
}
