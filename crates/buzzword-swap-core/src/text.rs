//! Text processing utilities.
//!
//! Provides markup stripping, sentence splitting and tokenization for the
//! built-in syntax heuristics.

use regex::Regex;
use std::sync::LazyLock;

use crate::dictionaries::abbreviations::is_abbreviation;

/// ANSI SGR escapes and `[[`/`]]` highlight brackets.
static MARKUP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m|\[\[|\]\]").expect("valid regex"));

/// Remove terminal colour escapes and highlight brackets.
pub fn strip_markup(text: &str) -> String {
    MARKUP_PATTERN.replace_all(text, "").into_owned()
}

/// Split text into sentences.
///
/// Breaks after `.`, `!` or `?` when the next visible character starts a new
/// sentence, and on blank lines. Periods after known abbreviations, single
/// initials and inside decimal numbers do not break.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        current.push(ch);

        let boundary = if matches!(ch, '.' | '!' | '?') {
            is_boundary(&chars, i)
        } else {
            ch == '\n' && chars.get(i + 1) == Some(&'\n')
        };

        if boundary {
            push_trimmed(&mut sentences, &current);
            current.clear();
        }
        i += 1;
    }

    push_trimmed(&mut sentences, &current);
    sentences
}

/// Split a sentence into word and punctuation tokens.
///
/// Leading and trailing punctuation become separate tokens; apostrophes and
/// hyphens inside a word stay attached.
pub fn tokenize(sentence: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for chunk in sentence.split_whitespace() {
        let chars: Vec<char> = chunk.chars().collect();
        let start = chars
            .iter()
            .position(|c| c.is_alphanumeric())
            .unwrap_or(chars.len());
        let end = chars
            .iter()
            .rposition(|c| c.is_alphanumeric())
            .map_or(start, |p| p + 1);

        tokens.extend(chars[..start].iter().map(char::to_string));
        if start < end {
            tokens.push(chars[start..end].iter().collect());
        }
        tokens.extend(chars[end.max(start)..].iter().map(char::to_string));
    }

    tokens
}

fn push_trimmed(sentences: &mut Vec<String>, current: &str) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

fn is_boundary(chars: &[char], pos: usize) -> bool {
    let next = chars[pos + 1..].iter().find(|c| !c.is_whitespace()).copied();
    let Some(next) = next else {
        return true;
    };

    // Still inside a run of terminators ("?!", "...")
    if matches!(next, '.' | '!' | '?') && chars.get(pos + 1) == Some(&next) {
        return false;
    }

    if chars[pos] == '.' {
        let before = word_before(chars, pos);
        if is_abbreviation(&before) {
            return false;
        }
        if before.chars().count() == 1 && before.chars().all(char::is_uppercase) {
            return false;
        }
        // 3.14
        if before.chars().last().is_some_and(|c| c.is_ascii_digit())
            && chars.get(pos + 1).is_some_and(char::is_ascii_digit)
        {
            return false;
        }
    }

    !next.is_lowercase()
}

fn word_before(chars: &[char], pos: usize) -> String {
    let start = chars[..pos]
        .iter()
        .rposition(|c| !(c.is_alphanumeric() || *c == '.'))
        .map_or(0, |p| p + 1);
    chars[start..pos].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("This is a sentence. This is another sentence.");
        assert_eq!(sentences, vec!["This is a sentence.", "This is another sentence."]);
    }

    #[test]
    fn abbreviations_not_split() {
        let sentences = split_sentences("Dr. Smith leads the lab. He values impact.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("Dr. Smith"));
    }

    #[test]
    fn decimals_not_split() {
        let sentences = split_sentences("Growth was 3.5 percent. That is modest.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("3.5"));
    }

    #[test]
    fn lowercase_continuation_not_split() {
        let sentences = split_sentences("See the appendix, e.g. the tables. Next part.");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn blank_line_splits() {
        let sentences = split_sentences("Heading without stop\n\nBody text here.");
        assert_eq!(sentences, vec!["Heading without stop", "Body text here."]);
    }

    #[test]
    fn question_and_exclamation() {
        let sentences = split_sentences("Is this synergy? It is! Truly.");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("  \n ").is_empty());
    }

    #[test]
    fn tokenize_separates_punctuation() {
        assert_eq!(
            tokenize("“Our vision, it's long-term.”"),
            vec!["“", "Our", "vision", ",", "it's", "long-term", ".", "”"]
        );
    }

    #[test]
    fn tokenize_symbol_only_chunk() {
        assert_eq!(tokenize("— ok"), vec!["—", "ok"]);
    }

    #[test]
    fn strip_markup_removes_escapes_and_brackets() {
        let text = "Our \u{1b}[93mgrowth\u{1b}[0m and [[scaling]] matter.";
        assert_eq!(strip_markup(text), "Our growth and scaling matter.");
    }
}
