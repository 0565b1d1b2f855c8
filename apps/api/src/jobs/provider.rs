//! Job Listings Provider: the external job-search API behind a narrow trait.
//!
//! `AdzunaProvider` is the production backend. Tests swap in a fake through
//! `Arc<dyn JobListingsProvider>` without touching the matcher or handlers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::{debug, warn};

use crate::jobs::models::{JobPage, JobPosting};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("could not decode provider response: {0}")]
    Decode(String),

    #[error("provider did not respond within {0:?}")]
    Timeout(Duration),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A source of job postings, queried one page at a time.
///
/// `what` may be empty, meaning "any title". Pages are 1-based.
#[async_trait]
pub trait JobListingsProvider: Send + Sync {
    async fn fetch_page(
        &self,
        what: &str,
        location: &str,
        page: u32,
        results_per_page: u32,
    ) -> Result<JobPage, ProviderError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Adzuna backend
// ────────────────────────────────────────────────────────────────────────────

/// Credentials and endpoint for the Adzuna search API.
#[derive(Debug, Clone)]
pub struct AdzunaConfig {
    pub app_id: String,
    pub app_key: String,
    /// Country segment of the search URL, e.g. `us`.
    pub country: String,
    pub base_url: String,
}

#[derive(Clone)]
pub struct AdzunaProvider {
    client: Client,
    config: AdzunaConfig,
}

impl AdzunaProvider {
    pub fn new(config: AdzunaConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    fn search_url(&self, page: u32) -> String {
        format!(
            "{}/{}/search/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.country,
            page
        )
    }
}

#[async_trait]
impl JobListingsProvider for AdzunaProvider {
    async fn fetch_page(
        &self,
        what: &str,
        location: &str,
        page: u32,
        results_per_page: u32,
    ) -> Result<JobPage, ProviderError> {
        let mut params: Vec<(&str, String)> = vec![
            ("app_id", self.config.app_id.clone()),
            ("app_key", self.config.app_key.clone()),
            ("where", location.to_string()),
            ("results_per_page", results_per_page.to_string()),
        ];
        if !what.trim().is_empty() {
            params.push(("what", what.to_string()));
        }

        debug!(page, results_per_page, "Fetching job listings page");

        let response = self
            .client
            .get(self.search_url(page))
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AdzunaError>(&body)
                .ok()
                .and_then(|e| e.display.or(e.exception))
                .unwrap_or(body);
            warn!(page, status = status.as_u16(), "Job listings provider error: {message}");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        parse_search_response(&body)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire format
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct AdzunaSearchResponse {
    #[serde(default)]
    count: Option<u64>,
    #[serde(default)]
    results: Vec<AdzunaJob>,
}

#[derive(Debug, Deserialize)]
struct AdzunaJob {
    #[serde(deserialize_with = "id_as_string")]
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    company: Option<DisplayName>,
    #[serde(default)]
    location: Option<DisplayName>,
    #[serde(default)]
    redirect_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DisplayName {
    #[serde(default)]
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AdzunaError {
    display: Option<String>,
    exception: Option<String>,
}

impl From<AdzunaJob> for JobPosting {
    fn from(job: AdzunaJob) -> Self {
        JobPosting {
            id: job.id,
            title: job.title.unwrap_or_default(),
            company: job
                .company
                .and_then(|c| c.display_name)
                .unwrap_or_default(),
            location: job
                .location
                .and_then(|l| l.display_name)
                .unwrap_or_default(),
            description: job.description.unwrap_or_default(),
            redirect_url: job.redirect_url.unwrap_or_default(),
        }
    }
}

/// Adzuna sends ids as strings, but numeric ids show up in older payloads.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

fn parse_search_response(body: &str) -> Result<JobPage, ProviderError> {
    let parsed: AdzunaSearchResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Decode(e.to_string()))?;
    Ok(JobPage {
        results: parsed.results.into_iter().map(JobPosting::from).collect(),
        total_available: parsed.count,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Candidate pool acquisition
// ────────────────────────────────────────────────────────────────────────────

/// Fetches up to `pages` pages of `results_per_page` postings, in page order.
///
/// Any page failure aborts the whole acquisition: a partial pool is never returned.
/// Stops early once a page is empty or, when the provider reported a total,
/// once that total is reached.
pub async fn fetch_candidates(
    provider: &dyn JobListingsProvider,
    what: &str,
    location: &str,
    pages: u32,
    results_per_page: u32,
) -> Result<Vec<JobPosting>, ProviderError> {
    let mut pool = Vec::new();

    for page in 1..=pages {
        let batch = provider
            .fetch_page(what, location, page, results_per_page)
            .await?;

        let returned = batch.results.len();
        pool.extend(batch.results);

        let reached_total = batch
            .total_available
            .is_some_and(|total| pool.len() as u64 >= total);
        if returned == 0 || reached_total {
            break;
        }
    }

    Ok(pool)
}
