//! Language selection and language-specific character classes.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::VersecraftError;

pub mod corpus;
pub mod lexicon;

/// Romanian diphthongs, in replacement priority order.
///
/// The syllable counter collapses each of these into a single placeholder
/// before counting vowel runs, so a diphthong contributes one syllable
/// nucleus, not two. The rhyme-key extractor probes them as word suffixes,
/// longest first (they are all two characters, so list order stands in for
/// length order).
pub const DIPHTHONGS_RO: &[&str] = &[
    "ea", "oa", "ia", "ie", "io", "iu", "ua", "uo", "ui", "eu", "ei", "âi", "îi",
];

/// The two languages Versecraft understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Romanian ("ro")
    #[value(name = "ro", alias = "romanian")]
    Romanian,
    /// English ("en")
    #[value(name = "en", alias = "english")]
    English,
}

impl Language {
    /// The two-letter code used throughout the public interface.
    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Romanian => "ro",
            Language::English => "en",
        }
    }

    /// Check whether `c` belongs to this language's vowel class.
    ///
    /// English includes `y`; Romanian includes the accented vowels
    /// `ă`, `î`, `â`. Both sets are the simplified classes the syllable
    /// heuristic counts runs of.
    pub fn is_vowel(&self, c: char) -> bool {
        match self {
            Language::English => matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'),
            Language::Romanian => matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'ă' | 'î' | 'â'),
        }
    }

    /// The embedded seed corpus for this language.
    pub fn corpus(&self) -> &'static str {
        match self {
            Language::Romanian => corpus::CORPUS_RO,
            Language::English => corpus::CORPUS_EN,
        }
    }

    /// Theme suggestions for this language.
    pub fn themes(&self) -> &'static [&'static str] {
        match self {
            Language::Romanian => corpus::THEMES_RO,
            Language::English => corpus::THEMES_EN,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Romanian
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl FromStr for Language {
    type Err = VersecraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ro" | "romanian" => Ok(Language::Romanian),
            "en" | "english" => Ok(Language::English),
            other => Err(VersecraftError::invalid_argument(format!(
                "Unknown language: {other} (expected \"ro\" or \"en\")"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::Romanian.as_code(), "ro");
        assert_eq!(Language::English.as_code(), "en");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("ro".parse::<Language>().unwrap(), Language::Romanian);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_vowel_classes() {
        assert!(Language::English.is_vowel('y'));
        assert!(!Language::Romanian.is_vowel('y'));
        assert!(Language::Romanian.is_vowel('ă'));
        assert!(Language::Romanian.is_vowel('â'));
        assert!(!Language::English.is_vowel('b'));
    }
}
