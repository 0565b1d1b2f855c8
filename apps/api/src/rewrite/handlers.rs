//! Axum route handlers for the Rewrite API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::rewrite::rewrite_resume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RewriteRequest {
    pub job_description: String,
    pub resume: String,
}

#[derive(Debug, Serialize)]
pub struct RewriteResponse {
    pub rewritten_resume: String,
}

/// POST /api/rewrite-resume
pub async fn handle_rewrite(
    State(state): State<AppState>,
    Json(request): Json<RewriteRequest>,
) -> Result<Json<RewriteResponse>, AppError> {
    let rewritten_resume =
        rewrite_resume(&state.llm, &request.job_description, &request.resume).await?;

    info!(chars = rewritten_resume.len(), "Resume rewritten");

    Ok(Json(RewriteResponse { rewritten_resume }))
}
