//! Abbreviations that end with a period but do not end a sentence.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Abbreviations, lowercase and without the trailing period.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles
    set.extend([
        "mr", "mrs", "ms", "dr", "prof", "rev", "sr", "jr", "st", "hon", "phd", "gen", "gov",
    ]);

    // Latin and reference shorthand
    set.extend([
        "etc", "vs", "e.g", "i.e", "et al", "cf", "viz", "ibid", "n.b", "approx", "fig", "no",
        "vol", "pp", "ch", "eq",
    ]);

    // Organisations, places, dates
    set.extend([
        "inc", "corp", "ltd", "co", "dept", "univ", "u.s", "u.k", "e.u", "a.m", "p.m", "jan",
        "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    ]);

    set
});

/// Check if a word (with or without its trailing period) is a known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(lower.trim_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_abbreviations() {
        assert!(is_abbreviation("Dr"));
        assert!(is_abbreviation("etc."));
        assert!(is_abbreviation("e.g"));
        assert!(is_abbreviation("Univ."));
    }

    #[test]
    fn ordinary_words() {
        assert!(!is_abbreviation("impact"));
        assert!(!is_abbreviation("today"));
    }
}
