//! Axum route handler for resume upload.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::parser::extract_candidate;
use crate::extraction::validators::{is_valid_resume_file, sanitize_filename};
use crate::models::candidate::CandidateRecord;
use crate::routes::envelope::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub candidate_id: Uuid,
    pub candidate: CandidateRecord,
    pub message: String,
}

/// POST /api/upload
///
/// Accepts a multipart `file` field holding a PDF or DOCX resume, parses it
/// and stores the resulting candidate.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<UploadResponse>>, AppError> {
    let (filename, data) = read_file_field(multipart).await?;

    if !is_valid_resume_file(&filename) {
        return Err(AppError::Validation(
            "Invalid file type. Only PDF and DOCX files are allowed.".to_string(),
        ));
    }

    let max = state.config.max_upload_size;
    if data.len() > max {
        return Err(AppError::Validation(format!(
            "File too large. Maximum size is {:.1}MB.",
            max as f64 / (1024.0 * 1024.0)
        )));
    }

    // Document decoding is CPU-bound; run it on the blocking pool.
    let source = filename.clone();
    let candidate = tokio::task::spawn_blocking(move || extract_candidate(&data, &source))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Resume parsing task failed: {e}")))??;

    let candidate = state.store.add(candidate).await?;
    info!("Uploaded {filename} as candidate {}", candidate.id);

    Ok(Json(ApiResponse::ok(UploadResponse {
        candidate_id: candidate.id,
        candidate,
        message: "Resume uploaded and parsed successfully".to_string(),
    })))
}

/// Pulls the sanitized filename and contents of the `file` field.
async fn read_file_field(mut multipart: Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .map(sanitize_filename)
            .filter(|f| !f.is_empty())
            .ok_or_else(|| AppError::Validation("Uploaded file has no name".to_string()))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        return Ok((filename, data));
    }

    Err(AppError::Validation("Missing multipart field 'file'".to_string()))
}
