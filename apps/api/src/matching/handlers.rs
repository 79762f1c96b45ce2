use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::matching::matcher::{parse_top_n, DEFAULT_TOP_N};
use crate::models::job::{JobDescription, MatchResult};
use crate::routes::envelope::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub job_description: JobDescription,
    #[serde(default = "default_top_n")]
    pub top_n: i64,
}

fn default_top_n() -> i64 {
    DEFAULT_TOP_N
}

/// POST /api/match
///
/// Ranks every stored candidate against the job description and returns the top N.
/// Scores are computed fresh on each call and never written back.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<ApiResponse<Vec<MatchResult>>>, AppError> {
    let top_n = parse_top_n(request.top_n)?;

    let candidates = state.store.list().await?;
    if candidates.is_empty() {
        return Ok(Json(ApiResponse::with_message(
            vec![],
            "No candidates found in database",
        )));
    }

    let results = state
        .matcher
        .rank(&request.job_description, &candidates, top_n);

    info!(
        "Matched {} candidates against '{}', returning top {}",
        candidates.len(),
        request.job_description.title,
        results.len()
    );
    Ok(Json(ApiResponse::ok(results)))
}
