//! The interchangeable-buzzword test.
//!
//! [`Tester::run_test`] locates the first vocabulary term in a passage,
//! picks a substitute, rewrites every occurrence, and asks the syntax oracle
//! whether the result still has a sentence root. A passage with no
//! vocabulary term yields [`TestOutcome::NotFound`].

use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SwapResult;
use crate::locate::find_buzzword;
use crate::oracle::{HeuristicParser, NgramSimilarity, SimilarityOracle, SyntaxOracle, has_root};
use crate::rewrite::{Highlight, substitute_all};
use crate::select::{DEFAULT_SIMILARITY_THRESHOLD, SelectionPath, choose_substitute};
use crate::vocabulary::Vocabulary;

/// Result of a completed substitution test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TestResult {
    /// The term found in the passage, as authored in the vocabulary.
    pub original_term: String,
    /// The substitute that replaced it.
    pub replacement_term: String,
    /// How many occurrences were replaced.
    pub substitution_count: usize,
    /// The passage after substitution (highlighted when enabled).
    pub rewritten_text: String,
    /// Whether the rewritten passage still has a sentence root.
    pub syntax_ok: bool,
    /// Similarity between the substitute and the original.
    pub similarity: f64,
    /// Which selection branch produced the substitute.
    pub selection: SelectionPath,
    /// Candidate slots considered.
    pub candidate_count: usize,
    /// Candidate slots at or above the threshold.
    pub qualifying_candidates: usize,
}

/// Outcome of [`Tester::run_test`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TestOutcome {
    /// A buzzword was found and swapped.
    Swapped(TestResult),
    /// No vocabulary term occurs in the passage.
    NotFound,
}

impl TestOutcome {
    /// The result, if a buzzword was found.
    pub const fn result(&self) -> Option<&TestResult> {
        match self {
            Self::Swapped(result) => Some(result),
            Self::NotFound => None,
        }
    }
}

/// Tunables for a test run.
#[derive(Debug, Clone, PartialEq)]
pub struct TestSettings {
    /// Minimum similarity for a candidate to qualify.
    pub threshold: f64,
    /// Markers around inserted substitutes; `None` disables highlighting.
    pub highlight: Option<Highlight>,
}

impl Default for TestSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
            highlight: Some(Highlight::ansi()),
        }
    }
}

/// Runs substitution tests against a fixed vocabulary and pair of oracles.
#[derive(Debug, Clone)]
pub struct Tester<S, P> {
    vocab: Vocabulary,
    similarity: S,
    syntax: P,
    settings: TestSettings,
}

impl Tester<NgramSimilarity, HeuristicParser> {
    /// A tester using the built-in oracles.
    pub fn builtin(vocab: Vocabulary) -> Self {
        Self::new(vocab, NgramSimilarity::new(), HeuristicParser::new())
    }
}

impl<S: SimilarityOracle, P: SyntaxOracle> Tester<S, P> {
    /// Create a tester with default settings.
    pub fn new(vocab: Vocabulary, similarity: S, syntax: P) -> Self {
        Self {
            vocab,
            similarity,
            syntax,
            settings: TestSettings::default(),
        }
    }

    /// Replace all settings.
    pub fn with_settings(mut self, settings: TestSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the similarity threshold.
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.settings.threshold = threshold;
        self
    }

    /// Set or clear highlight markers.
    pub fn with_highlight(mut self, highlight: Option<Highlight>) -> Self {
        self.settings.highlight = highlight;
        self
    }

    /// The vocabulary in use.
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// The active settings.
    pub const fn settings(&self) -> &TestSettings {
        &self.settings
    }

    /// Run the substitution test on `text`.
    ///
    /// `rng` drives the random choice among qualifying candidates; seed it
    /// for reproducible runs.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn run_test<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> SwapResult<TestOutcome> {
        let Some(original) = find_buzzword(text, &self.vocab) else {
            tracing::info!("no buzzword found");
            return Ok(TestOutcome::NotFound);
        };

        let selection = choose_substitute(
            original,
            &self.vocab,
            &self.similarity,
            self.settings.threshold,
            rng,
        )?;

        let rewrite = substitute_all(
            text,
            original,
            &selection.term,
            self.settings.highlight.as_ref(),
        );

        let tokens = self.syntax.parse(&rewrite.text)?;
        let syntax_ok = has_root(&tokens);

        tracing::info!(
            original,
            replacement = %selection.term,
            count = rewrite.count,
            syntax_ok,
            "buzzword swapped"
        );

        Ok(TestOutcome::Swapped(TestResult {
            original_term: original.to_string(),
            replacement_term: selection.term,
            substitution_count: rewrite.count,
            rewritten_text: rewrite.text,
            syntax_ok,
            similarity: selection.score,
            selection: selection.path,
            candidate_count: selection.candidate_count,
            qualifying_candidates: selection.qualifying_count,
        }))
    }
}
