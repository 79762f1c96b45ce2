use std::sync::Arc;

use crate::candidates::store::CandidateStore;
use crate::config::Config;
use crate::matching::matcher::Matcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable store. JSON file by default; PostgreSQL when DATABASE_URL is set.
    pub store: Arc<dyn CandidateStore>,
    /// One matcher per process, uniform noise in production.
    pub matcher: Arc<Matcher>,
    pub config: Config,
}
