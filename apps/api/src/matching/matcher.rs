//! Resume-Job Matcher: one stateless request: validate → fetch pool → dedup → rank.
//!
//! Every call builds and drops its own pool, vectors and scores; nothing is
//! shared between concurrent calls except the provider handle.
//! Dropping the returned future cancels any in-flight provider request.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::jobs::models::{JobPosting, RankedJobPosting};
use crate::jobs::provider::{fetch_candidates, JobListingsProvider, ProviderError};
use crate::matching::dedup::dedup_by_id;
use crate::matching::ranking::{apply_similarity_floor, rank};
use crate::matching::similarity::{ScoringConfig, MAX_SCORE};

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("job listings provider failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("scoring failed: {0}")]
    Scoring(String),
}

impl MatchError {
    fn missing(field: &'static str) -> Self {
        MatchError::Validation {
            field,
            message: "is required and cannot be blank".to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Request / result
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    pub resume_text: String,
    /// Blank means "any title".
    #[serde(default)]
    pub query: String,
    pub location: String,
    /// Optional exclusive floor; postings at or below it are dropped.
    #[serde(default)]
    pub min_similarity: Option<f64>,
}

impl MatchRequest {
    pub fn new(resume_text: &str, query: &str, location: &str) -> Self {
        Self {
            resume_text: resume_text.to_string(),
            query: query.to_string(),
            location: location.to_string(),
            min_similarity: None,
        }
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.resume_text.trim().is_empty() {
            return Err(MatchError::missing("resume_text"));
        }
        if self.location.trim().is_empty() {
            return Err(MatchError::missing("location"));
        }
        if let Some(floor) = self.min_similarity {
            if !(0.0..=MAX_SCORE).contains(&floor) {
                return Err(MatchError::Validation {
                    field: "min_similarity",
                    message: format!("must be between 0 and {MAX_SCORE}"),
                });
            }
        }
        Ok(())
    }
}

/// Ranked postings, best first, plus the size of the deduplicated pool they came from.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub results: Vec<RankedJobPosting>,
    pub candidates: usize,
}

impl MatchResult {
    pub fn top_similarity(&self) -> Option<f64> {
        self.results.first().map(|r| r.similarity)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Matcher
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct MatcherConfig {
    pub pages: u32,
    pub results_per_page: u32,
    /// Aggregate budget for all page fetches of one match.
    pub fetch_timeout: Duration,
    pub scoring: ScoringConfig,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            pages: 5,
            results_per_page: 50,
            fetch_timeout: Duration::from_secs(20),
            scoring: ScoringConfig::default(),
        }
    }
}

#[derive(Clone)]
pub struct Matcher {
    provider: Arc<dyn JobListingsProvider>,
    config: MatcherConfig,
}

impl Matcher {
    pub fn new(provider: Arc<dyn JobListingsProvider>, config: MatcherConfig) -> Self {
        Self { provider, config }
    }

    /// Fetches the deduplicated candidate pool in page order, under the aggregate timeout.
    pub async fn candidate_pool(
        &self,
        query: &str,
        location: &str,
    ) -> Result<Vec<JobPosting>, ProviderError> {
        let fetch = fetch_candidates(
            self.provider.as_ref(),
            query.trim(),
            location.trim(),
            self.config.pages,
            self.config.results_per_page,
        );

        let pool = tokio::time::timeout(self.config.fetch_timeout, fetch)
            .await
            .map_err(|_| ProviderError::Timeout(self.config.fetch_timeout))??;

        Ok(dedup_by_id(pool))
    }

    /// Ranks the provider's postings for `(query, location)` against the resume.
    ///
    /// Validation happens before any provider call. An empty result means no
    /// candidates were found (or none cleared `min_similarity`), never a hidden error.
    pub async fn match_resume(&self, request: &MatchRequest) -> Result<MatchResult, MatchError> {
        request.validate()?;

        let pool = self.candidate_pool(&request.query, &request.location).await?;
        let candidates = pool.len();

        let mut results = rank(&request.resume_text, pool, &self.config.scoring)?;
        if let Some(floor) = request.min_similarity {
            results = apply_similarity_floor(results, floor);
        }

        Ok(MatchResult {
            results,
            candidates,
        })
    }
}
