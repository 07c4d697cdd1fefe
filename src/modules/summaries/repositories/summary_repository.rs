use async_trait::async_trait;
use sqlx::MySqlPool;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use crate::core::{AppError, Result};
use crate::modules::summaries::models::SummaryDocument;

/// Read-only access to precomputed summary documents by exact key
#[async_trait]
pub trait SummaryStore: Send + Sync {
    /// Fetch the document stored under `key`.
    ///
    /// Returns `Ok(None)` when no document exists; any other failure
    /// (connectivity, undecodable content) is an error.
    async fn get(&self, key: &str) -> Result<Option<SummaryDocument>>;

    /// Check that the store is reachable
    async fn ping(&self) -> Result<()>;

    /// Wait until the store answers a ping, giving up after `timeout`
    async fn wait_until_ready(&self, timeout: Duration) -> Result<()> {
        match tokio::time::timeout(timeout, self.ping()).await {
            Ok(result) => result,
            Err(_) => Err(AppError::internal(format!(
                "Summary store not ready after {}s",
                timeout.as_secs()
            ))),
        }
    }
}

fn decode_document(key: &str, raw: &str) -> Result<SummaryDocument> {
    serde_json::from_str(raw).map_err(|e| {
        tracing::error!(key = %key, error = %e, "Failed to decode summary document");
        AppError::Json(e)
    })
}

/// Summary store backed by the `merchant_summaries` table
pub struct MySqlSummaryStore {
    pool: MySqlPool,
}

impl MySqlSummaryStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl SummaryStore for MySqlSummaryStore {
    async fn get(&self, key: &str) -> Result<Option<SummaryDocument>> {
        let raw: Option<String> = sqlx::query_scalar(
            r#"
            SELECT document
            FROM merchant_summaries
            WHERE doc_key = ?
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        raw.map(|raw| decode_document(key, &raw)).transpose()
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum StoredEntry {
    Document(String),
    Unavailable(String),
}

/// In-process summary store for tests and local runs.
///
/// Documents are kept as JSON text and decoded on read, so malformed
/// entries fail the same way they do against MySQL.
#[derive(Debug, Default)]
pub struct InMemorySummaryStore {
    entries: RwLock<HashMap<String, StoredEntry>>,
}

impl InMemorySummaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: impl Into<String>, document: &SummaryDocument) -> Result<()> {
        let raw = serde_json::to_string(document)?;
        self.insert_raw(key, raw)
    }

    /// Store raw JSON text under `key`, valid or not
    pub fn insert_raw(&self, key: impl Into<String>, raw: impl Into<String>) -> Result<()> {
        self.write()?
            .insert(key.into(), StoredEntry::Document(raw.into()));
        Ok(())
    }

    /// Make reads of `key` fail as if the store were unreachable
    pub fn fail_key(&self, key: impl Into<String>, reason: impl Into<String>) -> Result<()> {
        self.write()?
            .insert(key.into(), StoredEntry::Unavailable(reason.into()));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, StoredEntry>>> {
        self.entries
            .write()
            .map_err(|_| AppError::internal("Summary store lock poisoned"))
    }
}

#[async_trait]
impl SummaryStore for InMemorySummaryStore {
    async fn get(&self, key: &str) -> Result<Option<SummaryDocument>> {
        let entry = self
            .entries
            .read()
            .map_err(|_| AppError::internal("Summary store lock poisoned"))?
            .get(key)
            .cloned();

        match entry {
            None => Ok(None),
            Some(StoredEntry::Document(raw)) => decode_document(key, &raw).map(Some),
            Some(StoredEntry::Unavailable(reason)) => Err(AppError::internal(format!(
                "Failed to get document {}: {}",
                key, reason
            ))),
        }
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
