//! Closed-class word lists used to find a sentence's main verb.
//!
//! Finite auxiliaries and modals, linking verbs, common irregular past
//! forms, determiners, subject pronouns and prepositions. Lookups expect
//! lowercase input.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Finite auxiliaries and modal verbs.
pub static AUXILIARIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "am", "is", "are", "was", "were", "has", "have", "had", "do", "does", "did", "will",
        "would", "shall", "should", "can", "could", "may", "might", "must", "isn't", "aren't",
        "wasn't", "weren't", "hasn't", "haven't", "hadn't", "doesn't", "don't", "didn't",
        "won't", "wouldn't", "can't", "cannot", "couldn't", "shouldn't", "mustn't",
    ]
    .into_iter()
    .collect()
});

/// Linking verbs in their finite forms.
pub static LINKING_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "seem", "seems", "seemed", "appear", "appears", "appeared", "become", "becomes",
        "became", "remain", "remains", "remained", "stay", "stays", "stayed", "look", "looks",
        "looked", "sound", "sounds", "sounded", "feel", "feels", "felt",
    ]
    .into_iter()
    .collect()
});

/// Irregular simple-past forms.
pub static IRREGULAR_PAST: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Everyday verbs
    set.extend([
        "went", "made", "took", "gave", "saw", "came", "knew", "got", "said", "told", "thought",
        "found", "brought", "bought", "kept", "held", "left", "felt", "meant", "sent", "spent",
        "built", "began", "ran", "stood", "understood", "wrote", "spoke", "chose", "drove",
        "grew", "drew", "threw", "led", "met", "paid", "sold", "taught", "sought", "won", "lost",
    ]);

    // Less common
    set.extend([
        "arose", "awoke", "bore", "bred", "caught", "crept", "dealt", "dug", "fed", "fought",
        "fled", "forbade", "forgot", "froze", "hid", "knelt", "rang", "rose", "shook", "shone",
        "shot", "slid", "sang", "sank", "sprang", "stole", "strode", "strove", "swore", "swam",
        "tore", "underwent", "wore", "wove", "wrought",
    ]);

    set
});

/// Determiners and possessives that open a noun phrase.
pub static DETERMINERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its",
        "our", "their", "each", "every", "some", "any", "no", "all", "both", "many", "several",
    ]
    .into_iter()
    .collect()
});

/// Pronouns that can stand as a sentence subject.
pub static SUBJECT_PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["i", "we", "you", "they", "he", "she", "it", "who", "which"]
        .into_iter()
        .collect()
});

/// Prepositions and conjunctions, which never precede a finite verb directly.
pub static FUNCTION_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "of", "in", "on", "at", "to", "for", "with", "by", "from", "into", "through", "across",
        "about", "over", "under", "between", "within", "without", "and", "or", "but", "nor",
        "as", "than", "if", "because", "while", "whether",
    ]
    .into_iter()
    .collect()
});

/// Words ending in -ed that usually act as adjectives.
pub static ADJECTIVE_EXCEPTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "advanced", "aged", "beloved", "blessed", "detailed", "dedicated", "experienced",
        "interested", "limited", "naked", "related", "sacred", "skilled", "talented", "tired",
        "varied", "wicked", "wretched",
    ]
    .into_iter()
    .collect()
});

/// Whether `word` is a finite auxiliary or modal.
pub fn is_auxiliary(word: &str) -> bool {
    AUXILIARIES.contains(word)
}

/// Whether `word` is a finite linking verb.
pub fn is_linking_verb(word: &str) -> bool {
    LINKING_VERBS.contains(word)
}

/// Whether `word` is an irregular past form.
pub fn is_irregular_past(word: &str) -> bool {
    IRREGULAR_PAST.contains(word)
}

/// Whether `word` is a determiner.
pub fn is_determiner(word: &str) -> bool {
    DETERMINERS.contains(word)
}

/// Whether `word` can be a subject pronoun.
pub fn is_subject_pronoun(word: &str) -> bool {
    SUBJECT_PRONOUNS.contains(word)
}

/// Whether `word` is a preposition or conjunction.
pub fn is_function_word(word: &str) -> bool {
    FUNCTION_WORDS.contains(word)
}

/// Whether an -ed `word` is more likely an adjective.
pub fn is_adjective_exception(word: &str) -> bool {
    ADJECTIVE_EXCEPTIONS.contains(word)
}
