//! Case-insensitive, count-tracked term substitution.
//!
//! [`substitute_all`] walks the original text one character position at a
//! time. When the window starting at the current position, lowercased as a
//! whole, equals the lowercased term it emits the substitute and jumps past the whole window;
//! otherwise it copies one character. The jump is always the length of the
//! *original* term, whatever the substitute's length, so matches never
//! overlap and the scan only ever looks at original-text characters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Markers placed around each inserted substitute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Highlight {
    /// Emitted before the substitute.
    pub open: String,
    /// Emitted after the substitute.
    pub close: String,
}

/// ANSI "bright yellow" escape.
pub const ANSI_YELLOW: &str = "\u{1b}[93m";
/// ANSI reset escape.
pub const ANSI_RESET: &str = "\u{1b}[0m";

impl Highlight {
    /// Bright yellow terminal highlighting.
    pub fn ansi() -> Self {
        Self {
            open: ANSI_YELLOW.to_string(),
            close: ANSI_RESET.to_string(),
        }
    }

    /// Plain-text `[[...]]` markers for non-terminal output.
    pub fn brackets() -> Self {
        Self {
            open: "[[".to_string(),
            close: "]]".to_string(),
        }
    }
}

/// Output of a rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The text with every occurrence replaced.
    pub text: String,
    /// How many occurrences were replaced.
    pub count: usize,
}

/// Replace every occurrence of `term` in `text` with `substitute`.
///
/// Matching is case-insensitive, leftmost-first and non-overlapping. Text
/// outside matched spans is copied unchanged. An empty `term` matches
/// nothing.
#[tracing::instrument(skip(text, highlight), fields(text_len = text.len(), highlighted = highlight.is_some()))]
pub fn substitute_all(
    text: &str,
    term: &str,
    substitute: &str,
    highlight: Option<&Highlight>,
) -> Rewrite {
    let chars: Vec<char> = text.chars().collect();
    let needle: Vec<char> = term.chars().collect();

    if needle.is_empty() {
        return Rewrite {
            text: text.to_string(),
            count: 0,
        };
    }

    let replacement = match highlight {
        Some(h) => format!("{}{substitute}{}", h.open, h.close),
        None => substitute.to_string(),
    };

    let lowered_term = term.to_lowercase();
    let mut out = String::with_capacity(text.len());
    let mut count = 0;
    let mut i = 0;

    while i < chars.len() {
        if window_matches(&chars[i..], needle.len(), &lowered_term) {
            out.push_str(&replacement);
            count += 1;
            i += needle.len();
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    tracing::debug!(count, "rewrite finished");
    Rewrite { text: out, count }
}

/// Whether the first `width` characters of `haystack`, lowercased as a
/// string, equal `lowered_term`.
///
/// Lowercasing the window as a whole keeps context-sensitive mappings (Greek
/// final sigma) in step with how the locator lowercases the passage.
fn window_matches(haystack: &[char], width: usize, lowered_term: &str) -> bool {
    haystack.len() >= width
        && haystack[..width]
            .iter()
            .collect::<String>()
            .to_lowercase()
            == lowered_term
}
