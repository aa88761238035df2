//! Buzzword location.
//!
//! Precedence is vocabulary order, not position in the text: the first
//! vocabulary entry that occurs anywhere in the text wins, even if another
//! entry appears earlier in the passage.

use crate::vocabulary::Vocabulary;

/// Find the first vocabulary term that occurs in `text`, ignoring case.
///
/// Returns the term as authored in the vocabulary, or `None` when no entry
/// matches.
#[tracing::instrument(skip_all, fields(text_len = text.len(), vocab_len = vocab.len()))]
pub fn find_buzzword<'v>(text: &str, vocab: &'v Vocabulary) -> Option<&'v str> {
    let found = vocab.iter().find(|term| Vocabulary::occurs_in(term, text));
    tracing::debug!(term = ?found, "locator finished");
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(terms: &[&str]) -> Vocabulary {
        Vocabulary::new(terms.iter().copied()).unwrap()
    }

    #[test]
    fn vocabulary_order_beats_text_position() {
        let text = "impact breeds innovation";
        assert_eq!(
            find_buzzword(text, &vocab(&["innovation", "impact"])),
            Some("innovation")
        );
        assert_eq!(
            find_buzzword(text, &vocab(&["impact", "innovation"])),
            Some("impact")
        );
    }

    #[test]
    fn no_match_returns_none() {
        let text = "The weather is nice today.";
        assert_eq!(find_buzzword(text, &Vocabulary::builtin()), None);
    }

    #[test]
    fn returns_term_as_authored() {
        let text = "We champion OPEN SCIENCE everywhere.";
        assert_eq!(
            find_buzzword(text, &vocab(&["Open Science"])),
            Some("Open Science")
        );
    }

    #[test]
    fn substring_terms_match_independently() {
        // "innovation" is found inside the longer phrase and listed first.
        let v = vocab(&["innovation", "responsible research and innovation"]);
        let text = "We practise responsible research and innovation.";
        assert_eq!(find_buzzword(text, &v), Some("innovation"));
    }

    #[test]
    fn matches_inside_words() {
        // Plain substring containment: "scaling" is inside "upscaling".
        assert_eq!(
            find_buzzword("Upscaling is hard.", &vocab(&["scaling"])),
            Some("scaling")
        );
    }

    #[test]
    fn builtin_finds_first_listed_term() {
        let text = "Our transformation drives impact.";
        assert_eq!(find_buzzword(text, &Vocabulary::builtin()), Some("impact"));
    }
}
