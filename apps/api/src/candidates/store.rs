//! Flat record collection behind upload, listing and matching.
//!
//! `AppState` holds an `Arc<dyn CandidateStore>`, chosen at startup:
//! `PgCandidateStore` when `DATABASE_URL` is set, `JsonFileStore` otherwise.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::candidate::CandidateRecord;

#[async_trait]
pub trait CandidateStore: Send + Sync {
    async fn add(&self, candidate: CandidateRecord) -> Result<CandidateRecord>;

    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<CandidateRecord>>;

    async fn get(&self, id: Uuid) -> Result<Option<CandidateRecord>>;

    /// Returns `false` when no record had this id.
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// Case-insensitive substring search over names and skills.
    async fn search(&self, query: &str) -> Result<Vec<CandidateRecord>> {
        let all = self.list().await?;
        Ok(all.into_iter().filter(|c| c.matches_query(query)).collect())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// JsonFileStore
// ────────────────────────────────────────────────────────────────────────────

/// Stores every record in one pretty-printed JSON array on disk.
///
/// Writes rewrite the whole file. The mutex serialises read-modify-write
/// cycles within this process only.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens the store, creating the parent directory and an empty array if needed.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            tokio::fs::write(&path, b"[]")
                .await
                .with_context(|| format!("Failed to initialise {}", path.display()))?;
            info!("Created empty candidate store at {}", path.display());
        }

        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    async fn read_all(&self) -> Result<Vec<CandidateRecord>> {
        let raw = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        serde_json::from_slice(&raw)
            .with_context(|| format!("Corrupt candidate store at {}", self.path.display()))
    }

    async fn write_all(&self, candidates: &[CandidateRecord]) -> Result<()> {
        let raw = serde_json::to_vec_pretty(candidates)?;
        tokio::fs::write(&self.path, raw)
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

#[async_trait]
impl CandidateStore for JsonFileStore {
    async fn add(&self, candidate: CandidateRecord) -> Result<CandidateRecord> {
        let _guard = self.lock.lock().await;
        let mut all = self.read_all().await?;
        all.push(candidate.clone());
        self.write_all(&all).await?;
        debug!("Stored candidate {} ({} total)", candidate.id, all.len());
        Ok(candidate)
    }

    async fn list(&self) -> Result<Vec<CandidateRecord>> {
        let _guard = self.lock.lock().await;
        self.read_all().await
    }

    async fn get(&self, id: Uuid) -> Result<Option<CandidateRecord>> {
        Ok(self.list().await?.into_iter().find(|c| c.id == id))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let _guard = self.lock.lock().await;
        let all = self.read_all().await?;
        let before = all.len();
        let remaining: Vec<_> = all.into_iter().filter(|c| c.id != id).collect();

        if remaining.len() == before {
            return Ok(false);
        }
        self.write_all(&remaining).await?;
        info!("Deleted candidate {id}");
        Ok(true)
    }
}
