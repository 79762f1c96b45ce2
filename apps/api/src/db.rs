use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::candidates::pg_store::PgCandidateStore;
use crate::candidates::store::{CandidateStore, JsonFileStore};
use crate::config::Config;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Picks the candidate store backend from configuration.
pub async fn open_candidate_store(config: &Config) -> Result<Arc<dyn CandidateStore>> {
    match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            Ok(Arc::new(PgCandidateStore::new(pool).await?))
        }
        None => {
            info!("Using JSON candidate store at {}", config.candidate_store_path);
            Ok(Arc::new(JsonFileStore::open(&config.candidate_store_path).await?))
        }
    }
}
