use serde::{Deserialize, Serialize};

/// A single job posting as returned by the listings provider.
///
/// `id` is unique within one fetch batch; callers use it for upsert/dedup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Job body. This is the field ranked against the resume.
    pub description: String,
    /// Opaque passthrough to the original posting.
    pub redirect_url: String,
}

/// A posting annotated with its similarity to the resume (0 – 100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedJobPosting {
    #[serde(flatten)]
    pub posting: JobPosting,
    pub similarity: f64,
}

/// One page of provider results.
#[derive(Debug, Clone, Default)]
pub struct JobPage {
    pub results: Vec<JobPosting>,
    /// Total postings the provider reports for the query, across all pages.
    /// `None` when the response carried no count.
    pub total_available: Option<u64>,
}
