//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::jobs::models::JobPosting;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobsQuery {
    #[serde(default)]
    pub what: Option<String>,
    #[serde(rename = "where", default)]
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub results: Vec<JobPosting>,
}

/// GET /api/jobs?what=&where=
///
/// Returns the deduplicated candidate pool, unranked, in provider order.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobsQuery>,
) -> Result<Json<JobsResponse>, AppError> {
    let location = params.location.unwrap_or_default();
    if location.trim().is_empty() {
        return Err(AppError::Validation(
            "Missing \"where\" parameter".to_string(),
        ));
    }
    let what = params.what.unwrap_or_default();

    let results = state.matcher.candidate_pool(&what, &location).await?;
    info!(count = results.len(), "Job listings fetched");

    Ok(Json(JobsResponse { results }))
}
