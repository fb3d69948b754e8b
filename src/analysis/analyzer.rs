//! Poem analyzer implementation.
//!
//! Scores a poem on meter fit, rhyme density, vocabulary variety, and
//! sentiment, and derives a composite score plus human-readable notes and a
//! single improvement suggestion. All measurements come from the approximate
//! heuristics in [`crate::analysis::phonetics`]; the report is a plain record,
//! read-only after construction.

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::phonetics::{line_syllables, rhyme_key};
use crate::analysis::tokenizer::{last_word, tokenize};
use crate::error::{Result, VersecraftError};
use crate::language::{Language, lexicon};

/// Sentiment polarity hint derived from fixed per-language lexicons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate statistics for one analyzed poem.
///
/// Ratios (`rhyme_density`, `vocab_variety`, `meter_fit`) live in [0, 1] and
/// `score` in [0, 100]. Created once per analysis call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The non-blank input lines, in order.
    pub lines: Vec<String>,
    /// Approximate syllable count per line.
    pub syllables: Vec<usize>,
    /// Mean syllable count, rounded to two decimals.
    pub avg: f64,
    /// Population standard deviation of syllable counts, two decimals.
    pub stdev: f64,
    /// Fraction of end-words sharing a rhyme key with another line.
    pub rhyme_density: f64,
    /// Distinct content words over total content words.
    pub vocab_variety: f64,
    /// Lexicon-based polarity hint.
    pub sentiment: Sentiment,
    /// Fraction of lines whose syllable count hits the target range.
    pub meter_fit: f64,
    /// Composite score in [0, 100], one decimal.
    pub score: f64,
    /// Bilingual diagnostic notes (fixed thresholds).
    pub notes: Vec<String>,
    /// Improvement suggestions (currently a single entry).
    pub suggestions: Vec<String>,
}

/// Analyzer configured for one language and syllable target range.
///
/// # Examples
///
/// ```
/// use versecraft::analysis::analyzer::PoemAnalyzer;
/// use versecraft::language::Language;
///
/// let analyzer = PoemAnalyzer::new(Language::English, (2, 4)).unwrap();
/// let report = analyzer.analyze("the cat sat\nthe hat sat").unwrap();
/// assert_eq!(report.rhyme_density, 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct PoemAnalyzer {
    language: Language,
    target_low: usize,
    target_high: usize,
}

impl PoemAnalyzer {
    /// Create an analyzer for `language` with an inclusive syllable target
    /// range. Fails when `low > high`.
    pub fn new(language: Language, target_range: (usize, usize)) -> Result<Self> {
        let (target_low, target_high) = target_range;
        if target_low > target_high {
            return Err(VersecraftError::invalid_argument(format!(
                "target syllable range is inverted: {target_low} > {target_high}"
            )));
        }
        Ok(PoemAnalyzer {
            language,
            target_low,
            target_high,
        })
    }

    /// The configured language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The inclusive target syllable range.
    pub fn target_range(&self) -> (usize, usize) {
        (self.target_low, self.target_high)
    }

    /// Analyze `text` and build a report.
    ///
    /// Returns an error when the text holds no non-blank lines; every other
    /// input is total.
    pub fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        let lang = self.language;
        let lines: Vec<String> = text
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.to_string())
            .collect();
        if lines.is_empty() {
            return Err(VersecraftError::empty_input());
        }

        let syllables: Vec<usize> = lines.iter().map(|l| line_syllables(l, lang)).collect();
        let n = syllables.len() as f64;
        let avg = syllables.iter().sum::<usize>() as f64 / n;
        let stdev = (syllables
            .iter()
            .map(|&s| (s as f64 - avg).powi(2))
            .sum::<f64>()
            / n)
            .sqrt();

        let rhyme_density = self.rhyme_density(&lines);
        let vocab_variety = self.vocab_variety(text);
        let sentiment = self.sentiment(text);

        let (lo, hi) = (self.target_low, self.target_high);
        let in_range = syllables.iter().filter(|&&s| lo <= s && s <= hi).count();
        let meter_fit = in_range as f64 / n;

        let score = 40.0 * meter_fit
            + 25.0 * rhyme_density
            + 20.0 * vocab_variety
            + 15.0 * (1.0 - (stdev / 6.0).min(1.0));

        debug!(
            "analyzed {} lines: meter_fit={meter_fit:.3} rhyme_density={rhyme_density:.3} \
             vocab_variety={vocab_variety:.3} stdev={stdev:.3}",
            lines.len()
        );

        let mut notes = Vec::new();
        if meter_fit < 0.5 {
            notes.push(
                "Multe versuri ies din intervalul de silabe țintă / Many lines fall outside target syllable range."
                    .to_string(),
            );
        }
        if rhyme_density < 0.3 {
            notes.push(
                "Rima e rară; poți adăuga rime la final de vers / Rhyme density is low; consider rhymed endings."
                    .to_string(),
            );
        }
        if vocab_variety < 0.35 {
            notes.push(
                "Vocabular repetitiv; încearcă metafore sau verbe mai precise / Repetitive vocabulary; try fresh images."
                    .to_string(),
            );
        }

        let suggestions = vec![self.shortening_suggestion(&lines, &syllables)];

        Ok(AnalysisReport {
            lines,
            syllables,
            avg: round2(avg),
            stdev: round2(stdev),
            rhyme_density: round2(rhyme_density),
            vocab_variety: round2(vocab_variety),
            sentiment,
            meter_fit: round2(meter_fit),
            score: round1(score),
            notes,
            suggestions,
        })
    }

    /// Fraction of end-words whose rhyme key occurs on more than one line.
    fn rhyme_density(&self, lines: &[String]) -> f64 {
        let keys: Vec<String> = lines
            .iter()
            .map(|l| rhyme_key(&last_word(l).unwrap_or_default(), self.language))
            .collect();
        if keys.is_empty() {
            return 0.0;
        }
        let mut counts: AHashMap<&str, usize> = AHashMap::new();
        for k in &keys {
            *counts.entry(k.as_str()).or_insert(0) += 1;
        }
        let paired: usize = counts.values().filter(|&&c| c > 1).sum();
        paired as f64 / keys.len().max(1) as f64
    }

    /// Distinct over total content tokens, stopwords removed. Zero when the
    /// text has no content tokens at all.
    fn vocab_variety(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        let content: Vec<&String> = tokens
            .iter()
            .filter(|t| !lexicon::is_stop_word(self.language, t))
            .collect();
        if content.is_empty() {
            return 0.0;
        }
        let distinct: std::collections::HashSet<&str> =
            content.iter().map(|t| t.as_str()).collect();
        distinct.len() as f64 / content.len() as f64
    }

    /// Sign of (positive hits − negative hits) over the distinct token set.
    fn sentiment(&self, text: &str) -> Sentiment {
        let tokens: std::collections::HashSet<String> = tokenize(text).into_iter().collect();
        let pos = lexicon::positive_words(self.language);
        let neg = lexicon::negative_words(self.language);
        let pos_hits = tokens.iter().filter(|t| pos.contains(t.as_str())).count() as i64;
        let neg_hits = tokens.iter().filter(|t| neg.contains(t.as_str())).count() as i64;
        match (pos_hits - neg_hits).signum() {
            1 => Sentiment::Positive,
            -1 => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    /// Propose trimming the line whose syllable count strays furthest from
    /// the midpoint of the target range.
    fn shortening_suggestion(&self, lines: &[String], syllables: &[usize]) -> String {
        let midpoint = ((self.target_low + self.target_high) / 2) as i64;
        let mut worst = 0;
        let mut worst_dev = -1i64;
        for (i, &s) in syllables.iter().enumerate() {
            let dev = (midpoint - s as i64).abs();
            if dev > worst_dev {
                worst = i;
                worst_dev = dev;
            }
        }
        let line = &lines[worst];
        let mut tokens = tokenize(line);
        tokens.pop();
        let trimmed = tokens.join(" ");
        match self.language {
            Language::English => format!(
                "Try shortening line {} by removing a filler word, e.g., '{}' → '{}'.",
                worst + 1,
                line,
                trimmed
            ),
            Language::Romanian => format!(
                "Încearcă să scurtezi versul {} eliminând un cuvânt de umplutură, ex.: '{}' → '{}'.",
                worst + 1,
                line,
                trimmed
            ),
        }
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
