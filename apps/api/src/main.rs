mod candidates;
mod config;
mod db;
mod errors;
mod extraction;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::open_candidate_store;
use crate::matching::matcher::Matcher;
use crate::matching::noise::FixedNoise;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting HireMind API v{} ({})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );

    let store = open_candidate_store(&config).await?;

    let matcher = if config.match_noise {
        Arc::new(Matcher::default())
    } else {
        info!("Match score noise disabled");
        Arc::new(Matcher::new(Arc::new(FixedNoise(0.0))))
    };

    let state = AppState {
        store,
        matcher,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
