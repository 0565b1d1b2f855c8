pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::rewrite::handlers as rewrite;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/jobs", get(jobs::handle_list_jobs))
        .route("/api/match-resume", post(matching::handle_match_resume))
        .route("/api/rewrite-resume", post(rewrite::handle_rewrite))
        .with_state(state)
}
