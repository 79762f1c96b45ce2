pub mod envelope;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::candidates::handlers as candidates;
use crate::extraction::handlers as upload;
use crate::matching::handlers as matching;
use crate::state::AppState;

/// Headroom above the file size limit for multipart boundaries and headers.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_size + MULTIPART_OVERHEAD;

    Router::new()
        .route("/api/health", get(health::health_handler))
        // Upload
        .route("/api/upload", post(upload::handle_upload))
        // Candidates
        .route("/api/candidates", get(candidates::handle_list_candidates))
        .route(
            "/api/candidates/stats",
            get(candidates::handle_candidate_stats),
        )
        .route(
            "/api/candidates/search",
            get(candidates::handle_search_candidates),
        )
        .route(
            "/api/candidates/:id",
            get(candidates::handle_get_candidate).delete(candidates::handle_delete_candidate),
        )
        // Matching
        .route("/api/match", post(matching::handle_match))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
