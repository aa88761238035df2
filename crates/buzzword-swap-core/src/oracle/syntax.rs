//! Word-list driven dependency tagging.
//!
//! [`HeuristicParser`] only tries to answer one question per sentence: is
//! there a finite verb that could head it? The first token that looks like
//! one is tagged [`DependencyRole::Root`]. Later auxiliaries become
//! [`DependencyRole::Aux`], determiners [`DependencyRole::Det`], punctuation
//! [`DependencyRole::Punct`], and everything else [`DependencyRole::Dep`].
//!
//! A token counts as a finite verb when it is
//!
//! - an auxiliary, modal or linking verb,
//! - an irregular past form,
//! - a word directly after a subject pronoun (`we aim`, `they build`),
//! - an `-ed` form that does not follow a determiner or function word, or
//! - an `-s` form that follows a noun-like word (`impact breeds`).
//!
//! Terminal colour escapes and `[[`/`]]` highlight markers are removed before
//! parsing, so highlighted rewrites parse the same as plain ones.

use super::{DependencyRole, SyntaxOracle, Token};
use crate::dictionaries::verbs::{
    is_adjective_exception, is_auxiliary, is_determiner, is_function_word, is_irregular_past,
    is_linking_verb, is_subject_pronoun,
};
use crate::error::OracleError;
use crate::text;

/// Built-in syntax backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicParser;

impl HeuristicParser {
    /// Create the parser.
    pub const fn new() -> Self {
        Self
    }

    /// Tag the tokens of a single sentence.
    pub fn tag_sentence(sentence: &str) -> Vec<Token> {
        let words = text::tokenize(sentence);
        let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let mut tokens = Vec::with_capacity(words.len());
        let mut has_root = false;
        let mut prev: Option<&str> = None;

        for (word, low) in words.iter().zip(&lower) {
            let role = if !low.chars().any(char::is_alphanumeric) {
                DependencyRole::Punct
            } else if !has_root && is_finite_verb(low, prev) {
                has_root = true;
                DependencyRole::Root
            } else if is_auxiliary(low) {
                DependencyRole::Aux
            } else if is_determiner(low) {
                DependencyRole::Det
            } else {
                DependencyRole::Dep
            };

            // Adverbs are transparent: "we proactively prepare"
            let adverb = role == DependencyRole::Dep && low.ends_with("ly");
            if role != DependencyRole::Punct && !adverb {
                prev = Some(low.as_str());
            }
            tokens.push(Token::new(word.clone(), role));
        }

        tokens
    }
}

impl SyntaxOracle for HeuristicParser {
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    fn parse(&self, text: &str) -> Result<Vec<Token>, OracleError> {
        let plain = text::strip_markup(text);
        let tokens: Vec<Token> = text::split_sentences(&plain)
            .iter()
            .flat_map(|s| Self::tag_sentence(s))
            .collect();
        tracing::debug!(tokens = tokens.len(), "parsed");
        Ok(tokens)
    }
}

fn is_finite_verb(word: &str, prev: Option<&str>) -> bool {
    if is_auxiliary(word) || is_linking_verb(word) || is_irregular_past(word) {
        return true;
    }

    let Some(prev) = prev else {
        return false;
    };
    if is_determiner(prev) || is_function_word(prev) {
        return false;
    }

    if is_subject_pronoun(prev) {
        return !word.ends_with("ly");
    }

    let len = word.chars().count();
    if word.ends_with("ed") && len > 4 {
        return !is_adjective_exception(word);
    }

    word.ends_with('s')
        && len > 3
        && !["ss", "us", "is", "ics"].iter().any(|s| word.ends_with(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::has_root;

    fn root_of(sentence: &str) -> Option<String> {
        HeuristicParser::tag_sentence(sentence)
            .into_iter()
            .find(|t| t.role == DependencyRole::Root)
            .map(|t| t.text)
    }

    fn parses_ok(text: &str) -> bool {
        let tokens = HeuristicParser::new().parse(text).unwrap();
        has_root(&tokens)
    }

    #[test]
    fn auxiliary_heads_sentence() {
        assert_eq!(
            root_of("Our university is committed to impact."),
            Some("is".to_string())
        );
    }

    #[test]
    fn third_person_verb_after_noun() {
        assert_eq!(
            root_of("impact breeds innovation"),
            Some("breeds".to_string())
        );
        assert_eq!(
            root_of("The lab focuses on excellence."),
            Some("focuses".to_string())
        );
    }

    #[test]
    fn verb_after_subject_pronoun() {
        assert_eq!(
            root_of("We aim to build a culture."),
            Some("aim".to_string())
        );
    }

    #[test]
    fn adverb_after_pronoun_is_skipped() {
        assert_eq!(
            root_of("We proactively prepare."),
            Some("prepare".to_string())
        );
    }

    #[test]
    fn regular_past_form() {
        assert_eq!(
            root_of("This year, the board placed emphasis on growth."),
            Some("placed".to_string())
        );
    }

    #[test]
    fn irregular_past_form() {
        assert_eq!(
            root_of("Strategy drove every decision."),
            Some("drove".to_string())
        );
    }

    #[test]
    fn noun_phrase_has_no_root() {
        assert_eq!(root_of("Green transition"), None);
        assert_eq!(root_of("The holistic approach."), None);
    }

    #[test]
    fn roles_for_punctuation_and_determiners() {
        let tokens = HeuristicParser::tag_sentence("The team is ready.");
        let roles: Vec<DependencyRole> = tokens.iter().map(|t| t.role).collect();
        assert_eq!(
            roles,
            vec![
                DependencyRole::Det,
                DependencyRole::Dep,
                DependencyRole::Root,
                DependencyRole::Dep,
                DependencyRole::Punct,
            ]
        );
    }

    #[test]
    fn later_auxiliaries_are_aux() {
        let tokens = HeuristicParser::tag_sentence("Teams are told they should adapt.");
        let aux: Vec<&str> = tokens
            .iter()
            .filter(|t| t.role == DependencyRole::Aux)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(aux, vec!["should"]);
    }

    #[test]
    fn one_root_per_sentence() {
        let tokens = HeuristicParser::new()
            .parse("Growth is good. Scaling matters.")
            .unwrap();
        let roots = tokens
            .iter()
            .filter(|t| t.role == DependencyRole::Root)
            .count();
        assert_eq!(roots, 2);
    }

    #[test]
    fn highlighted_text_parses_like_plain_text() {
        let plain = HeuristicParser::new().parse("Our growth is real.").unwrap();
        let marked = HeuristicParser::new()
            .parse("Our \u{1b}[93mgrowth\u{1b}[0m is real.")
            .unwrap();
        assert_eq!(plain, marked);
    }

    #[test]
    fn empty_text_parses_to_nothing() {
        assert!(!parses_ok(""));
    }

    #[test]
    fn sample_sentence_parses() {
        assert!(parses_ok(
            "The Faculty is committed to fostering synergy in teaching."
        ));
    }
}
