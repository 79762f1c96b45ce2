use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::candidates::stats::compute_stats;
use crate::errors::AppError;
use crate::models::candidate::{CandidateRecord, CandidateStats};
use crate::routes::envelope::ApiResponse;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// GET /api/candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CandidateRecord>>>, AppError> {
    let candidates = state.store.list().await?;
    Ok(Json(ApiResponse::ok(candidates)))
}

/// GET /api/candidates/stats
pub async fn handle_candidate_stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CandidateStats>>, AppError> {
    let candidates = state.store.list().await?;
    Ok(Json(ApiResponse::ok(compute_stats(&candidates, Utc::now()))))
}

/// GET /api/candidates/search?q=
pub async fn handle_search_candidates(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<CandidateRecord>>>, AppError> {
    let query = params
        .q
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Query parameter 'q' is required".to_string()))?;

    let candidates = state.store.search(query.trim()).await?;
    Ok(Json(ApiResponse::ok(candidates)))
}

/// GET /api/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CandidateRecord>>, AppError> {
    let candidate = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
    Ok(Json(ApiResponse::ok(candidate)))
}

/// DELETE /api/candidates/:id
pub async fn handle_delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound(format!("Candidate {id} not found")));
    }
    Ok(Json(ApiResponse::with_message(
        (),
        "Candidate deleted successfully",
    )))
}
