//! Substitute selection.
//!
//! Every vocabulary entry other than the located term is a candidate, and
//! duplicate entries count as separate candidates. Each candidate is scored
//! once against the original. When at least one score reaches the threshold
//! a qualifying candidate is drawn uniformly at random; otherwise the best
//! scoring candidate wins, with ties going to the earliest vocabulary entry.

use rand::Rng;
use rand::seq::SliceRandom;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{SwapError, SwapResult};
use crate::oracle::SimilarityOracle;
use crate::vocabulary::Vocabulary;

/// Default minimum similarity for a candidate to qualify.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.25;

/// Which branch produced the substitute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPath {
    /// Drawn at random from candidates at or above the threshold.
    Qualifying,
    /// Highest-scoring candidate; none reached the threshold.
    Fallback,
}

/// The chosen substitute and how it was chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Selection {
    /// The substitute term, as authored in the vocabulary.
    pub term: String,
    /// Its similarity to the original term.
    pub score: f64,
    /// Which branch picked it.
    pub path: SelectionPath,
    /// Candidate slots considered (duplicates included).
    pub candidate_count: usize,
    /// Candidate slots at or above the threshold.
    pub qualifying_count: usize,
}

/// Choose a replacement for `original` from `vocab`.
///
/// Never returns `original` itself. Fails with [`SwapError::NoCandidates`]
/// when every entry equals `original`, and with [`SwapError::Oracle`] when
/// the similarity backend fails.
#[tracing::instrument(skip(vocab, oracle, rng), fields(vocab_len = vocab.len()))]
pub fn choose_substitute<S, R>(
    original: &str,
    vocab: &Vocabulary,
    oracle: &S,
    threshold: f64,
    rng: &mut R,
) -> SwapResult<Selection>
where
    S: SimilarityOracle + ?Sized,
    R: Rng + ?Sized,
{
    let scored = vocab
        .iter()
        .filter(|c| *c != original)
        .map(|c| oracle.similarity(c, original).map(|s| (c, s)))
        .collect::<Result<Vec<(&str, f64)>, _>>()?;

    let qualifying: Vec<(&str, f64)> = scored
        .iter()
        .copied()
        .filter(|(_, s)| *s >= threshold)
        .collect();

    let (pick, path) = match qualifying.choose(rng) {
        Some(&pick) => (pick, SelectionPath::Qualifying),
        None => match best_scoring(&scored) {
            Some(pick) => (pick, SelectionPath::Fallback),
            None => {
                return Err(SwapError::NoCandidates {
                    term: original.to_string(),
                });
            }
        },
    };

    tracing::debug!(
        substitute = pick.0,
        score = pick.1,
        ?path,
        candidates = scored.len(),
        qualifying = qualifying.len(),
        "substitute chosen"
    );

    Ok(Selection {
        term: pick.0.to_string(),
        score: pick.1,
        path,
        candidate_count: scored.len(),
        qualifying_count: qualifying.len(),
    })
}

/// First element of a stable descending sort by score.
///
/// NaN ranks below every number.
fn best_scoring<'a>(scored: &[(&'a str, f64)]) -> Option<(&'a str, f64)> {
    let rank = |s: f64| if s.is_nan() { f64::NEG_INFINITY } else { s };
    scored.iter().copied().reduce(|best, next| {
        if rank(next.1) > rank(best.1) {
            next
        } else {
            best
        }
    })
}
