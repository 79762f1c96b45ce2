use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::candidates::store::CandidateStore;
use crate::models::candidate::CandidateRecord;

/// PostgreSQL-backed store. Each record is kept whole as a JSONB document.
pub struct PgCandidateStore {
    pool: PgPool,
}

impl PgCandidateStore {
    /// Wraps an existing pool and makes sure the `candidates` table exists.
    pub async fn new(pool: PgPool) -> Result<Self> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS candidates (
                id          UUID PRIMARY KEY,
                data        JSONB NOT NULL,
                uploaded_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .context("Failed to create candidates table")?;

        info!("Candidate table ready");
        Ok(Self { pool })
    }
}

fn decode(value: serde_json::Value) -> Result<CandidateRecord> {
    serde_json::from_value(value).context("Stored candidate document is malformed")
}

#[async_trait]
impl CandidateStore for PgCandidateStore {
    async fn add(&self, candidate: CandidateRecord) -> Result<CandidateRecord> {
        let data = serde_json::to_value(&candidate)?;
        sqlx::query("INSERT INTO candidates (id, data, uploaded_at) VALUES ($1, $2, $3)")
            .bind(candidate.id)
            .bind(data)
            .bind(candidate.uploaded_at)
            .execute(&self.pool)
            .await?;
        Ok(candidate)
    }

    async fn list(&self) -> Result<Vec<CandidateRecord>> {
        let rows: Vec<serde_json::Value> =
            sqlx::query_scalar("SELECT data FROM candidates ORDER BY uploaded_at, id")
                .fetch_all(&self.pool)
                .await?;
        rows.into_iter().map(decode).collect()
    }

    async fn get(&self, id: Uuid) -> Result<Option<CandidateRecord>> {
        let row: Option<serde_json::Value> =
            sqlx::query_scalar("SELECT data FROM candidates WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        row.map(decode).transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
