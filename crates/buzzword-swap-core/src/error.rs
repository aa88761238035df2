//! Error types for buzzword-swap-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// The similarity threshold is NaN or infinite.
    #[error("similarity_threshold must be a finite number, got {0}")]
    InvalidThreshold(f64),

    /// The configured vocabulary could not be built.
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while building a [`Vocabulary`](crate::Vocabulary).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VocabularyError {
    /// No terms were supplied.
    #[error("vocabulary must contain at least one term")]
    Empty,

    /// A term was empty or whitespace-only.
    #[error("vocabulary term at position {index} is blank")]
    BlankTerm {
        /// Zero-based position of the offending term.
        index: usize,
    },
}

/// A similarity or syntax backend failed to answer.
#[derive(Error, Debug)]
pub enum OracleError {
    /// The backend could not produce a result for valid input.
    #[error("{oracle} oracle unavailable: {reason}")]
    Unavailable {
        /// Which oracle failed ("similarity" or "syntax").
        oracle: &'static str,
        /// Backend-supplied description of the failure.
        reason: String,
    },
}

impl OracleError {
    /// Shorthand for a similarity backend failure.
    pub fn similarity(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            oracle: "similarity",
            reason: reason.into(),
        }
    }

    /// Shorthand for a syntax backend failure.
    pub fn syntax(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            oracle: "syntax",
            reason: reason.into(),
        }
    }
}

/// Errors that can abort a substitution test.
#[derive(Error, Debug)]
pub enum SwapError {
    /// One of the oracles failed.
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// Every vocabulary entry equals the located term, so nothing can replace it.
    #[error("no substitute candidates for {term:?}: vocabulary holds no other term")]
    NoCandidates {
        /// The located term.
        term: String,
    },
}

/// Result type alias using [`SwapError`].
pub type SwapResult<T> = Result<T, SwapError>;
