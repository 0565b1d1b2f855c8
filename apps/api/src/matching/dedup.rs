use std::collections::HashSet;

use crate::jobs::models::JobPosting;

/// Drops postings whose id was already seen, keeping the first occurrence.
///
/// Provider pagination can repeat a posting across pages; input order is preserved.
pub fn dedup_by_id(postings: Vec<JobPosting>) -> Vec<JobPosting> {
    let mut seen = HashSet::with_capacity(postings.len());
    postings
        .into_iter()
        .filter(|p| seen.insert(p.id.clone()))
        .collect()
}
