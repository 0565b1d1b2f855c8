//! Ranking: scores every candidate against the resume and orders them best-first.
//!
//! Ties keep input order (`sort_by` is stable), so the caller must hand in a
//! deterministically ordered pool.

use crate::jobs::models::{JobPosting, RankedJobPosting};
use crate::matching::matcher::MatchError;
use crate::matching::similarity::{
    scaled_cosine, term_frequencies, IdfTable, ScoringConfig, TermVector, Weighting,
};
use crate::matching::tokenize::tokenize;

/// Scores and sorts `candidates` descending by similarity. Never truncates.
pub fn rank(
    resume_text: &str,
    candidates: Vec<JobPosting>,
    config: &ScoringConfig,
) -> Result<Vec<RankedJobPosting>, MatchError> {
    let resume_tokens = tokenize(resume_text, config.remove_stop_words);
    let description_tokens: Vec<Vec<String>> = candidates
        .iter()
        .map(|c| tokenize(&c.description, config.remove_stop_words))
        .collect();

    let idf = match config.weighting {
        Weighting::TermFrequency => None,
        Weighting::TfIdf => Some(IdfTable::from_documents(
            std::iter::once(resume_tokens.as_slice())
                .chain(description_tokens.iter().map(Vec::as_slice)),
        )),
    };
    let vectorize = |tokens: &[String]| -> TermVector {
        match &idf {
            Some(table) => table.weigh(tokens),
            None => term_frequencies(tokens),
        }
    };

    let resume_vector = vectorize(resume_tokens.as_slice());

    let mut ranked = Vec::with_capacity(candidates.len());
    for (posting, tokens) in candidates.into_iter().zip(&description_tokens) {
        let similarity = scaled_cosine(&resume_vector, &vectorize(tokens.as_slice()));
        if !similarity.is_finite() {
            return Err(MatchError::Scoring(format!(
                "non-finite similarity for posting {}",
                posting.id
            )));
        }
        ranked.push(RankedJobPosting {
            posting,
            similarity,
        });
    }

    ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    Ok(ranked)
}

/// Keeps postings scoring strictly above `floor`. Order is unchanged.
pub fn apply_similarity_floor(ranked: Vec<RankedJobPosting>, floor: f64) -> Vec<RankedJobPosting> {
    ranked
        .into_iter()
        .filter(|r| r.similarity > floor)
        .collect()
}
