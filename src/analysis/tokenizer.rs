//! Word tokenizer implementation.
//!
//! This module provides the single tokenizer used across generation and
//! analysis: a regex-based word extractor tolerant of Romanian diacritics and
//! a few Latin accented letters. Input is lower-cased before extraction, so
//! tokens are always normalized.
//!
//! # Examples
//!
//! ```
//! use versecraft::analysis::tokenizer::tokenize;
//!
//! let tokens = tokenize("Luna plutește, blând!");
//! assert_eq!(tokens, vec!["luna", "plutește", "blând"]);
//! ```

use std::sync::{Arc, LazyLock};

use regex::Regex;

/// The word-character class shared by both languages: ASCII word characters
/// (letters, digits, underscore), apostrophe, hyphen, and a fixed set of
/// Romanian/Latin accented letters.
const WORD_PATTERN: &str = r"[\w'ăâîșțàèéìòùâêîôûäëïöüœç-]+";

static DEFAULT_TOKENIZER: LazyLock<WordTokenizer> = LazyLock::new(WordTokenizer::new);

/// A regex-based tokenizer that extracts normalized word tokens.
///
/// Lower-cases its input, extracts maximal runs of the word-character class,
/// and drops tokens composed solely of hyphens. Punctuation is stripped
/// except internal hyphens and apostrophes ("mică-n" and "don't" survive as
/// single tokens).
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    /// The compiled word pattern
    pattern: Arc<Regex>,
}

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer {
            // The pattern is a fixed literal class; compilation cannot fail.
            pattern: Arc::new(Regex::new(WORD_PATTERN).expect("word pattern is valid")),
        }
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Tokenize `text` into lower-cased word tokens.
    ///
    /// Empty or punctuation-only input yields an empty vector. No error
    /// conditions; side-effect free.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.pattern
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .filter(|t| !t.trim_matches('-').is_empty())
            .collect()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenize `text` with the shared default tokenizer.
pub fn tokenize(text: &str) -> Vec<String> {
    DEFAULT_TOKENIZER.tokenize(text)
}

/// The last word token of `line`, if any.
pub fn last_word(line: &str) -> Option<String> {
    tokenize(line).pop()
}
