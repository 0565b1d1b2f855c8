//! Axum route handlers for the Match API.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::jobs::models::RankedJobPosting;
use crate::matching::matcher::MatchRequest;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub results: Vec<RankedJobPosting>,
    /// Similarity of the best match; `null` when nothing matched.
    pub top_similarity: Option<f64>,
    /// Size of the deduplicated candidate pool that was ranked.
    pub candidates: usize,
}

/// POST /api/match-resume
///
/// Fetches the candidate pool for (query, location) and returns it ranked against
/// the resume text, best first. An empty `results` list is a successful search.
pub async fn handle_match_resume(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let result = state.matcher.match_resume(&request).await?;

    info!(
        candidates = result.candidates,
        returned = result.results.len(),
        top = ?result.top_similarity(),
        "Resume matched"
    );

    Ok(Json(MatchResponse {
        top_similarity: result.top_similarity(),
        candidates: result.candidates,
        results: result.results,
    }))
}
