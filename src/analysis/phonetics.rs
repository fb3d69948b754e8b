//! Approximate syllable counting and rhyme-key extraction.
//!
//! Both heuristics are deliberate approximations, not linguistic parsing:
//! syllables are counted as maximal vowel runs (with Romanian diphthongs
//! collapsed first so they count as a single nucleus), and a rhyme key is a
//! short word suffix anchored at the final vowel cluster. Two words "rhyme"
//! when their keys compare equal.
//!
//! Everything here is a plain character scan; no regex engine involved.

use crate::analysis::tokenizer::tokenize;
use crate::language::{DIPHTHONGS_RO, Language};

/// Placeholder a collapsed Romanian diphthong leaves behind. Counted as part
/// of a vowel run so the diphthong still anchors a syllable nucleus.
const DIPHTHONG_MARK: char = '*';

/// Count maximal runs of vowel-class characters in `word`.
fn vowel_runs<F>(word: &str, is_vowel: F) -> usize
where
    F: Fn(char) -> bool,
{
    let mut runs = 0;
    let mut in_run = false;
    for c in word.chars() {
        if is_vowel(c) {
            if !in_run {
                runs += 1;
                in_run = true;
            }
        } else {
            in_run = false;
        }
    }
    runs
}

/// Approximate the syllable count of a single word.
///
/// Returns 0 for an empty word and at least 1 for any non-empty word.
///
/// English strips a single trailing silent "e" before counting vowel runs
/// over `aeiouy`. Romanian first collapses each known diphthong (in the
/// fixed priority order of [`DIPHTHONGS_RO`]) into a placeholder, then counts
/// runs over `aeiouăîâ` plus the placeholder, so "soare" counts "oa" once,
/// not twice.
///
/// # Examples
///
/// ```
/// use versecraft::analysis::phonetics::syllable_count;
/// use versecraft::language::Language;
///
/// assert_eq!(syllable_count("beautiful", Language::English), 3);
/// assert_eq!(syllable_count("soare", Language::Romanian), 2);
/// assert_eq!(syllable_count("", Language::English), 0);
/// ```
pub fn syllable_count(word: &str, language: Language) -> usize {
    let w = word.to_lowercase();
    if w.is_empty() {
        return 0;
    }
    match language {
        Language::English => {
            let stripped = w.strip_suffix('e').unwrap_or(&w);
            vowel_runs(stripped, |c| language.is_vowel(c)).max(1)
        }
        Language::Romanian => {
            let mut collapsed = w;
            for d in DIPHTHONGS_RO {
                collapsed = collapsed.replace(d, "*");
            }
            vowel_runs(&collapsed, |c| language.is_vowel(c) || c == DIPHTHONG_MARK).max(1)
        }
    }
}

/// Sum of per-token syllable counts for a whole line.
pub fn line_syllables(line: &str, language: Language) -> usize {
    tokenize(line)
        .iter()
        .map(|w| syllable_count(w, language))
        .sum()
}

/// Extract the rhyme key of a word.
///
/// The word is lower-cased and stripped to the letter set `a-z` plus
/// `ăâîșț`. English keys are the suffix starting at the last vowel
/// (`aeiouy`); Romanian first probes the known diphthongs as suffixes,
/// longest match first, then falls back to the same vowel-anchored suffix
/// over `aeiouăâî`. If the cleaned word holds no vowel at all, the key is
/// its last three characters.
///
/// Deterministic and case-invariant; an empty key is possible for input
/// with no letters.
pub fn rhyme_key(word: &str, language: Language) -> String {
    let cleaned: String = word
        .to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | 'ă' | 'â' | 'î' | 'ș' | 'ț'))
        .collect();

    if language == Language::Romanian {
        for d in DIPHTHONGS_RO {
            if cleaned.ends_with(d) {
                return (*d).to_string();
            }
        }
    }

    vowel_suffix(&cleaned, language).unwrap_or_else(|| last_chars(&cleaned, 3))
}

/// The suffix of `word` starting at its last vowel-class character.
fn vowel_suffix(word: &str, language: Language) -> Option<String> {
    word.char_indices()
        .filter(|(_, c)| language.is_vowel(*c))
        .next_back()
        .map(|(i, _)| word[i..].to_string())
}

/// The last `n` characters of `word` (the whole word when shorter).
fn last_chars(word: &str, n: usize) -> String {
    let chars: Vec<char> = word.chars().collect();
    chars[chars.len().saturating_sub(n)..].iter().collect()
}
