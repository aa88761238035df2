//! Character-trigram cosine similarity.
//!
//! Each term is lowercased, split into words, and every word is padded with
//! `#` on both sides before trigrams are taken. The score is the cosine of
//! the two trigram count vectors, so it falls in `[0.0, 1.0]`. Terms that
//! share stems ("scaling", "scalability") score high; unrelated terms score
//! near zero.

use std::collections::HashMap;

use super::SimilarityOracle;
use crate::error::OracleError;

/// Trigram length.
const GRAM: usize = 3;

/// Deterministic, dependency-free similarity backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NgramSimilarity;

impl NgramSimilarity {
    /// Create the backend.
    pub const fn new() -> Self {
        Self
    }

    /// Cosine similarity between the trigram profiles of `a` and `b`.
    ///
    /// Returns `0.0` when either side has no alphanumeric content.
    pub fn score(a: &str, b: &str) -> f64 {
        let left = profile(a);
        let right = profile(b);
        if left.is_empty() || right.is_empty() {
            return 0.0;
        }

        let dot: usize = left
            .iter()
            .filter_map(|(gram, n)| right.get(gram).map(|m| n * m))
            .sum();
        let norm = |p: &HashMap<String, usize>| {
            p.values().map(|n| (n * n) as f64).sum::<f64>().sqrt()
        };

        dot as f64 / (norm(&left) * norm(&right))
    }
}

impl SimilarityOracle for NgramSimilarity {
    fn similarity(&self, a: &str, b: &str) -> Result<f64, OracleError> {
        Ok(Self::score(a, b))
    }
}

/// Trigram counts for every word in `term`.
fn profile(term: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    let lower = term.to_lowercase();

    for word in lower.split(|c: char| !c.is_alphanumeric()) {
        if word.is_empty() {
            continue;
        }
        let padded: Vec<char> = std::iter::once('#')
            .chain(word.chars())
            .chain(std::iter::once('#'))
            .collect();
        for window in padded.windows(GRAM) {
            *counts.entry(window.iter().collect::<String>()).or_insert(0) += 1;
        }
    }

    counts
}
