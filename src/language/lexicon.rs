//! Stopword sets and sentiment lexicons.
//!
//! Fixed per-language word lists used by the analyzer: stopwords are excluded
//! from the vocabulary-variety ratio, and the sentiment lexicons drive the
//! positive/negative/neutral hint. All sets are built once behind `LazyLock`
//! and never change.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::language::Language;

/// Default English stop words list.
const STOP_WORDS_EN: &[&str] = &[
    "the", "a", "an", "and", "or", "of", "in", "on", "at", "for", "with", "by", "to", "from",
    "into", "over", "under", "is", "are", "was", "were", "be", "as", "that", "this", "those",
    "these", "it", "we", "you", "i", "they", "them", "us", "our", "your", "their",
];

/// Default Romanian stop words list.
const STOP_WORDS_RO: &[&str] = &[
    "și", "sau", "ori", "de", "din", "la", "pe", "pentru", "cu", "prin", "sub", "peste",
    "într-un", "într-o", "în", "într", "înspre", "este", "sunt", "eram", "ești", "e", "suntem",
    "sunteți", "un", "o", "niște", "ce", "că", "întru", "către", "mai", "prea", "iar", "dar",
    "să", "nu", "nici", "ci", "precum", "căci", "ai", "am", "au", "îl", "îți", "ți", "îmi", "mi",
    "ți-l", "își", "își-l", "vă", "vouă", "ne", "nouă", "lui", "ei", "el", "ea", "le", "l",
];

const POSITIVE_EN: &[&str] = &[
    "love", "light", "tender", "kind", "bright", "soft", "spring", "dawn", "smile", "hope",
    "song", "calm",
];

const NEGATIVE_EN: &[&str] = &[
    "dark", "cold", "lonely", "broken", "empty", "tears", "storm", "fall", "fade", "ache",
];

const POSITIVE_RO: &[&str] = &[
    "iubire",
    "lumină",
    "blând",
    "bun",
    "strălucit",
    "moale",
    "primăvară",
    "zori",
    "zâmbet",
    "speranță",
    "cântec",
    "liniște",
];

const NEGATIVE_RO: &[&str] = &[
    "întunecat",
    "rece",
    "singur",
    "frânt",
    "gol",
    "lacrimi",
    "furtună",
    "toamnă",
    "stinge",
    "durere",
];

fn to_set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

static STOP_WORDS_EN_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| to_set(STOP_WORDS_EN));
static STOP_WORDS_RO_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| to_set(STOP_WORDS_RO));
static POSITIVE_EN_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| to_set(POSITIVE_EN));
static NEGATIVE_EN_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| to_set(NEGATIVE_EN));
static POSITIVE_RO_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| to_set(POSITIVE_RO));
static NEGATIVE_RO_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| to_set(NEGATIVE_RO));

/// The stopword set for `language`.
pub fn stop_words(language: Language) -> &'static HashSet<&'static str> {
    match language {
        Language::English => &STOP_WORDS_EN_SET,
        Language::Romanian => &STOP_WORDS_RO_SET,
    }
}

/// The positive sentiment lexicon for `language`.
pub fn positive_words(language: Language) -> &'static HashSet<&'static str> {
    match language {
        Language::English => &POSITIVE_EN_SET,
        Language::Romanian => &POSITIVE_RO_SET,
    }
}

/// The negative sentiment lexicon for `language`.
pub fn negative_words(language: Language) -> &'static HashSet<&'static str> {
    match language {
        Language::English => &NEGATIVE_EN_SET,
        Language::Romanian => &NEGATIVE_RO_SET,
    }
}

/// Check if a word is a stop word in the given language.
pub fn is_stop_word(language: Language, word: &str) -> bool {
    stop_words(language).contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words() {
        assert!(is_stop_word(Language::English, "the"));
        assert!(!is_stop_word(Language::English, "moon"));
        assert!(is_stop_word(Language::Romanian, "și"));
        assert!(!is_stop_word(Language::Romanian, "luna"));
    }

    #[test]
    fn test_all_sets_built_and_nonempty() {
        for lang in [Language::English, Language::Romanian] {
            assert!(!stop_words(lang).is_empty());
            assert!(!positive_words(lang).is_empty());
            assert!(!negative_words(lang).is_empty());
        }
    }

    #[test]
    fn test_sentiment_lexicons_disjoint() {
        for lang in [Language::English, Language::Romanian] {
            let pos = positive_words(lang);
            let neg = negative_words(lang);
            assert!(pos.is_disjoint(neg));
        }
    }
}
