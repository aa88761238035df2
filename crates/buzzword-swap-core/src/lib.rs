//! Core library for buzzword-swap.
//!
//! Finds the first buzzword from a vocabulary in a passage, swaps every
//! occurrence for another buzzword, and asks a syntax oracle whether the
//! result still reads as a sentence. If it does, the buzzword was carrying
//! no meaning of its own.
//!
//! # Modules
//!
//! - [`vocabulary`] - The ordered buzzword list
//! - [`locate`] - Finding the first buzzword in a passage
//! - [`select`] - Choosing a substitute by similarity
//! - [`rewrite`] - Case-insensitive replace-all with highlighting
//! - [`oracle`] - Similarity and syntax backends
//! - [`tester`] - The end-to-end test
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use buzzword_swap_core::{Tester, Vocabulary};
//! use rand::SeedableRng;
//!
//! let tester = Tester::builtin(Vocabulary::builtin());
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let outcome = tester
//!     .run_test("We are committed to fostering synergy.", &mut rng)
//!     .expect("built-in oracles do not fail");
//!
//! if let Some(result) = outcome.result() {
//!     println!("{} -> {}", result.original_term, result.replacement_term);
//! }
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod dictionaries;
pub mod error;
pub mod locate;
pub mod oracle;
pub mod rewrite;
pub mod samples;
pub mod select;
pub mod tester;
pub mod text;
pub mod vocabulary;

pub use config::{Config, ConfigLoader, HighlightStyle, LogLevel};
pub use error::{ConfigError, ConfigResult, OracleError, SwapError, SwapResult, VocabularyError};
pub use locate::find_buzzword;
pub use oracle::{HeuristicParser, NgramSimilarity, SimilarityOracle, SyntaxOracle};
pub use rewrite::{Highlight, Rewrite, substitute_all};
pub use select::{DEFAULT_SIMILARITY_THRESHOLD, Selection, SelectionPath, choose_substitute};
pub use tester::{TestOutcome, TestResult, TestSettings, Tester};
pub use vocabulary::Vocabulary;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
