//! Scripted in-memory provider for tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::jobs::models::{JobPage, JobPosting};
use crate::jobs::provider::{JobListingsProvider, ProviderError};

pub fn posting(id: &str, description: &str) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        title: format!("Job {id}"),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        description: description.to_string(),
        redirect_url: format!("https://jobs.example.com/{id}"),
    }
}

#[derive(Default)]
pub struct FakeProvider {
    /// Page N (1-based) serves `pages[N - 1]`; pages past the end are empty.
    pub pages: Vec<Vec<JobPosting>>,
    /// Reported total; `None` reports no count at all.
    pub total_available: Option<u64>,
    pub fail_on_page: Option<u32>,
    pub delay: Option<Duration>,
    calls: AtomicU32,
    seen: Mutex<Vec<(String, String, u32, u32)>>,
}

impl FakeProvider {
    pub fn with_pages(pages: Vec<Vec<JobPosting>>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    pub fn failing_on(mut self, page: u32) -> Self {
        self.fail_on_page = Some(page);
        self
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(what, location, page, results_per_page)` for every call, in order.
    pub fn requests(&self) -> Vec<(String, String, u32, u32)> {
        self.seen.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl JobListingsProvider for FakeProvider {
    async fn fetch_page(
        &self,
        what: &str,
        location: &str,
        page: u32,
        results_per_page: u32,
    ) -> Result<JobPage, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut seen) = self.seen.lock() {
            seen.push((what.to_string(), location.to_string(), page, results_per_page));
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_on_page == Some(page) {
            return Err(ProviderError::Status {
                status: 503,
                message: format!("page {page} unavailable"),
            });
        }

        let results = (page as usize)
            .checked_sub(1)
            .and_then(|i| self.pages.get(i))
            .cloned()
            .unwrap_or_default();

        Ok(JobPage {
            results,
            total_available: self.total_available,
        })
    }
}
