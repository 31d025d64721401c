use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::LabelStore;

/// Process-local label store
#[derive(Debug, Default)]
pub struct MemoryLabelStore {
    labels: RwLock<HashMap<String, String>>,
}

impl MemoryLabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.labels.read().await.len()
    }
}

#[async_trait]
impl LabelStore for MemoryLabelStore {
    async fn get(&self, market_address: &str) -> Result<Option<String>> {
        Ok(self.labels.read().await.get(market_address).cloned())
    }

    async fn put(&self, market_address: &str, label: &str) -> Result<()> {
        self.labels
            .write()
            .await
            .insert(market_address.to_string(), label.to_string());
        Ok(())
    }

    async fn remove(&self, market_address: &str) -> Result<()> {
        self.labels.write().await.remove(market_address);
        Ok(())
    }
}
