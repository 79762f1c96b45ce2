use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub environment: String,
    /// When set, candidates live in PostgreSQL instead of the JSON file.
    pub database_url: Option<String>,
    pub candidate_store_path: String,
    /// Maximum accepted resume size in bytes.
    pub max_upload_size: usize,
    /// Adds the ±0.05 perturbation to match scores. Off gives reproducible rankings.
    pub match_noise: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            environment: env_or("ENVIRONMENT", "development"),
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            candidate_store_path: env_or("CANDIDATE_STORE_PATH", "data/candidates.json"),
            max_upload_size: env_or("MAX_UPLOAD_SIZE", "5242880")
                .parse::<usize>()
                .context("MAX_UPLOAD_SIZE must be a byte count")?,
            match_noise: env_or("MATCH_NOISE", "true")
                .parse::<bool>()
                .context("MATCH_NOISE must be true or false")?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
