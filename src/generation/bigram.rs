//! Bigram transition table built from a seed corpus.
//!
//! The "language model" is a first-order Markov table: each token maps to the
//! ordered sequence of tokens observed immediately after it, duplicates
//! retained. Frequency is encoded by repetition: sampling picks uniformly at
//! random from the successor sequence. Tables are cheap and rebuilt fresh per
//! generation request.

use std::sync::LazyLock;

use ahash::AHashMap;
use log::debug;

use crate::analysis::tokenizer::tokenize;
use crate::language::Language;

/// Sentence-start marker.
pub const START_MARKER: &str = "<s>";
/// Sentence-end marker.
pub const END_MARKER: &str = "</s>";

static END_ONLY: LazyLock<Vec<String>> = LazyLock::new(|| vec![END_MARKER.to_string()]);

/// First-order Markov transition table over corpus tokens.
///
/// Built by wrapping every non-blank corpus line in `<s>`/`</s>` markers and
/// concatenating the wrapped sequences into one flat stream before collecting
/// adjacencies. The markers are shared across lines, so `</s>` of one line is
/// adjacent to `<s>` of the next; content words never cross line boundaries
/// directly, but generated lines can still blend vocabulary from unrelated
/// corpus lines through the shared markers. That property is intentional and
/// kept.
///
/// # Examples
///
/// ```
/// use versecraft::generation::bigram::{BigramTable, START_MARKER};
///
/// let table = BigramTable::from_corpus("the moon is a lantern over quiet streets");
/// assert_eq!(table.successors(START_MARKER), Some(&["the".to_string()][..]));
/// assert_eq!(table.successors("the"), Some(&["moon".to_string()][..]));
/// ```
#[derive(Clone, Debug)]
pub struct BigramTable {
    successors: AHashMap<String, Vec<String>>,
}

impl BigramTable {
    /// Build a table from `corpus`, one verse per line.
    ///
    /// Deterministic: no randomness, no I/O. Every key present in the table
    /// maps to a non-empty successor sequence.
    pub fn from_corpus(corpus: &str) -> Self {
        let mut stream: Vec<String> = Vec::new();
        for line in corpus.lines() {
            if line.trim().is_empty() {
                continue;
            }
            stream.push(START_MARKER.to_string());
            stream.extend(tokenize(line));
            stream.push(END_MARKER.to_string());
        }

        let mut successors: AHashMap<String, Vec<String>> = AHashMap::new();
        for pair in stream.windows(2) {
            successors
                .entry(pair[0].clone())
                .or_default()
                .push(pair[1].clone());
        }

        debug!(
            "built bigram table: {} tokens, {} keys",
            stream.len(),
            successors.len()
        );
        BigramTable { successors }
    }

    /// Build a table from the embedded seed corpus of `language`.
    pub fn for_language(language: Language) -> Self {
        Self::from_corpus(language.corpus())
    }

    /// The recorded successors of `token`, if the token was ever observed
    /// with a follower.
    pub fn successors(&self, token: &str) -> Option<&[String]> {
        self.successors.get(token).map(|v| v.as_slice())
    }

    /// Successor candidates for `prev` with the degenerate-lookup fallback
    /// chain applied: unknown tokens fall back to the start marker's
    /// successors, and if even those are absent (empty corpus) to a single
    /// end marker. The result is never empty, so a random walk always has a
    /// next step and always terminates at `</s>`.
    pub fn next_candidates(&self, prev: &str) -> &[String] {
        self.successors(prev)
            .or_else(|| self.successors(START_MARKER))
            .unwrap_or(END_ONLY.as_slice())
    }

    /// Number of distinct keys in the table.
    pub fn len(&self) -> usize {
        self.successors.len()
    }

    /// Check whether the table holds no transitions at all.
    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }
}
