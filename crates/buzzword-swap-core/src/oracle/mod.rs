//! Capability interfaces for the two language backends.
//!
//! The pipeline only needs two answers from natural-language tooling: how
//! close two terms are ([`SimilarityOracle`]) and which tokens of a text carry
//! which dependency role ([`SyntaxOracle`]). Any model-backed implementation
//! can stand in for the built-in ones.
//!
//! Built-in implementations:
//!
//! - [`NgramSimilarity`]: character-trigram cosine similarity
//! - [`HeuristicParser`]: word-list driven root-verb tagging

pub mod similarity;
pub mod syntax;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use similarity::NgramSimilarity;
pub use syntax::HeuristicParser;

use crate::error::OracleError;

/// Scores the semantic closeness of two terms.
///
/// Implementations must be deterministic and pure for fixed inputs. Higher
/// scores mean closer terms; the nominal range is `[-1.0, 1.0]`. A backend
/// with no useful representation for a term should return a low or zero
/// score rather than an error.
pub trait SimilarityOracle {
    /// Score how close `a` is to `b`.
    fn similarity(&self, a: &str, b: &str) -> Result<f64, OracleError>;
}

/// Tags the tokens of a text with grammatical dependency roles.
pub trait SyntaxOracle {
    /// Parse `text` into tokens in reading order.
    fn parse(&self, text: &str) -> Result<Vec<Token>, OracleError>;
}

impl<T: SimilarityOracle + ?Sized> SimilarityOracle for &T {
    fn similarity(&self, a: &str, b: &str) -> Result<f64, OracleError> {
        (**self).similarity(a, b)
    }
}

impl<T: SyntaxOracle + ?Sized> SyntaxOracle for &T {
    fn parse(&self, text: &str) -> Result<Vec<Token>, OracleError> {
        (**self).parse(text)
    }
}

impl<T: SimilarityOracle + ?Sized> SimilarityOracle for Box<T> {
    fn similarity(&self, a: &str, b: &str) -> Result<f64, OracleError> {
        (**self).similarity(a, b)
    }
}

impl<T: SyntaxOracle + ?Sized> SyntaxOracle for Box<T> {
    fn parse(&self, text: &str) -> Result<Vec<Token>, OracleError> {
        (**self).parse(text)
    }
}

/// Grammatical role of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DependencyRole {
    /// Head of a sentence (its main verb).
    Root,
    /// Auxiliary or modal verb attached to the head.
    Aux,
    /// Determiner.
    Det,
    /// Punctuation.
    Punct,
    /// Any other dependent.
    Dep,
}

/// A token with its dependency role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Token {
    /// Token text as it appeared in the input.
    pub text: String,
    /// Assigned role.
    pub role: DependencyRole,
}

impl Token {
    /// Create a token.
    pub fn new(text: impl Into<String>, role: DependencyRole) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }
}

/// Whether any token is tagged as a sentence root.
pub fn has_root(tokens: &[Token]) -> bool {
    tokens.iter().any(|t| t.role == DependencyRole::Root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_root_detects_root_token() {
        let tokens = vec![
            Token::new("Growth", DependencyRole::Dep),
            Token::new("matters", DependencyRole::Root),
            Token::new(".", DependencyRole::Punct),
        ];
        assert!(has_root(&tokens));
    }

    #[test]
    fn has_root_false_without_root() {
        let tokens = vec![
            Token::new("Green", DependencyRole::Dep),
            Token::new("transition", DependencyRole::Dep),
        ];
        assert!(!has_root(&tokens));
        assert!(!has_root(&[]));
    }

    #[test]
    fn references_forward_to_the_oracle() {
        let parser = HeuristicParser::new();
        let boxed: Box<dyn SyntaxOracle> = Box::new(HeuristicParser::new());
        let text = "The team ships code.";
        assert_eq!(
            (&parser).parse(text).unwrap(),
            boxed.parse(text).unwrap()
        );
    }
}
