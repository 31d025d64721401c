use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use tracing::{debug, info};

use super::LabelStore;

/// SQLite store for tournament labels
pub struct SqliteLabelStore {
    pool: Pool<Sqlite>,
}

impl SqliteLabelStore {
    /// Create a new label store and initialize the database
    pub async fn new(database_url: &str) -> Result<Self> {
        // Create data directory if needed
        if let Some(path) = database_url.strip_prefix("sqlite:") {
            if let Some(parent) = std::path::Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .context("Failed to create database directory")?;
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)
            .context("Invalid database URL")?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .context("Failed to connect to database")?;

        let store = Self { pool };
        store.init_schema().await?;

        info!("Label store initialized");
        Ok(store)
    }

    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tournament_labels (
                market_address TEXT PRIMARY KEY,
                label TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create tournament_labels table")?;

        Ok(())
    }

    /// Number of stored labels
    pub async fn count(&self) -> Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tournament_labels")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count labels")?;

        Ok(row.0)
    }
}

#[async_trait]
impl LabelStore for SqliteLabelStore {
    async fn get(&self, market_address: &str) -> Result<Option<String>> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT label FROM tournament_labels WHERE market_address = ?")
                .bind(market_address)
                .fetch_optional(&self.pool)
                .await
                .context("Failed to fetch label")?;

        Ok(row.map(|(label,)| label))
    }

    async fn put(&self, market_address: &str, label: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO tournament_labels (market_address, label, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(market_address) DO UPDATE SET
                label = excluded.label,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(market_address)
        .bind(label)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .context("Failed to store label")?;

        debug!("Stored label for {}: {}", market_address, label);
        Ok(())
    }

    async fn remove(&self, market_address: &str) -> Result<()> {
        sqlx::query("DELETE FROM tournament_labels WHERE market_address = ?")
            .bind(market_address)
            .execute(&self.pool)
            .await
            .context("Failed to remove label")?;

        Ok(())
    }
}
