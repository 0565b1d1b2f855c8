//! Lexical similarity between a resume and a job description.
//!
//! Bag-of-words vectors compared by cosine similarity and scaled to 0 – 100.
//! Vectors are `BTreeMap`s so every sum runs in term order: the same two texts
//! always produce bit-identical scores.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::matching::tokenize::tokenize;

/// Term → weight.
pub type TermVector = BTreeMap<String, f64>;

/// Upper bound of the similarity scale.
pub const MAX_SCORE: f64 = 100.0;

/// How term counts are weighted before the cosine is taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    /// Raw term frequency.
    TermFrequency,
    /// Term frequency × smoothed inverse document frequency over the candidate pool.
    #[default]
    TfIdf,
}

impl FromStr for Weighting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tf" | "term_frequency" => Ok(Weighting::TermFrequency),
            "tfidf" | "tf_idf" => Ok(Weighting::TfIdf),
            other => Err(format!(
                "unknown weighting '{other}', expected 'term_frequency' or 'tf_idf'"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weighting: Weighting,
    pub remove_stop_words: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weighting: Weighting::TfIdf,
            remove_stop_words: true,
        }
    }
}

/// Similarity of two texts on a 0 – 100 scale, using raw term-frequency vectors.
///
/// Empty (or stop-word-only) input on either side scores 0.
pub fn score(resume_text: &str, job_description: &str) -> f64 {
    let resume = term_frequencies(&tokenize(resume_text, true));
    let description = term_frequencies(&tokenize(job_description, true));
    scaled_cosine(&resume, &description)
}

pub fn term_frequencies(tokens: &[String]) -> TermVector {
    let mut tf = TermVector::new();
    for token in tokens {
        *tf.entry(token.clone()).or_insert(0.0) += 1.0;
    }
    tf
}

/// Cosine similarity scaled to `[0, MAX_SCORE]`. Zero vectors score 0.
pub fn scaled_cosine(a: &TermVector, b: &TermVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let dot: f64 = small
        .iter()
        .filter_map(|(term, w)| large.get(term).map(|other| w * other))
        .sum();

    if dot == 0.0 {
        return 0.0;
    }

    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();

    // Rounding can push a self-match a hair over 1.0.
    ((dot / (norm_a * norm_b)) * MAX_SCORE).clamp(0.0, MAX_SCORE)
}

// ────────────────────────────────────────────────────────────────────────────
// Inverse document frequency
// ────────────────────────────────────────────────────────────────────────────

/// Document frequencies over one candidate pool. Built per request, never shared.
#[derive(Debug, Clone)]
pub struct IdfTable {
    documents: usize,
    document_frequency: HashMap<String, usize>,
}

impl IdfTable {
    pub fn from_documents<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut count = 0;
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for tokens in documents {
            count += 1;
            let mut seen: Vec<&String> = tokens.iter().collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *document_frequency.entry(term.clone()).or_insert(0) += 1;
            }
        }

        Self {
            documents: count,
            document_frequency,
        }
    }

    /// Smoothed IDF: `ln((1 + N) / (1 + df)) + 1`. Always ≥ 1, so shared terms
    /// never cancel out.
    pub fn idf(&self, term: &str) -> f64 {
        let df = self.document_frequency.get(term).copied().unwrap_or(0);
        ((1.0 + self.documents as f64) / (1.0 + df as f64)).ln() + 1.0
    }

    pub fn weigh(&self, tokens: &[String]) -> TermVector {
        let mut vector = term_frequencies(tokens);
        for (term, weight) in vector.iter_mut() {
            *weight *= self.idf(term);
        }
        vector
    }
}
