//! Line, stanza, and poem generation.
//!
//! Lines are bounded random walks over the bigram graph, optionally seeded
//! with keywords; stanzas are post-processed so end words satisfy the
//! requested rhyme scheme where the candidate pool allows it. All randomness
//! comes from a caller-supplied `Rng`, so seeded callers get reproducible
//! poems.

use log::debug;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};

use crate::analysis::phonetics::rhyme_key;
use crate::analysis::tokenizer::{last_word, tokenize};
use crate::error::{Result, VersecraftError};
use crate::generation::bigram::{BigramTable, END_MARKER, START_MARKER};
use crate::generation::scheme::rhyme_groups;
use crate::language::Language;

/// Probability that a line starts with one of the seed keywords.
const KEYWORD_LEAD_PROB: f64 = 0.7;
/// Probability that a raw line gets a keyword appended.
const KEYWORD_TAIL_PROB: f64 = 0.5;
/// Per-line token budget is drawn uniformly from this inclusive range.
const LINE_LEN_RANGE: (usize, usize) = (6, 10);

/// One stanza: an ordered sequence of line strings.
pub type Stanza = Vec<String>;

/// A generated poem: ordered stanzas of ordered lines.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Poem {
    pub language: Language,
    pub stanzas: Vec<Stanza>,
}

impl Poem {
    /// Render to plain text, stanzas separated by blank lines.
    pub fn render(&self) -> String {
        self.stanzas
            .iter()
            .map(|s| s.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Total number of lines across all stanzas.
    pub fn line_count(&self) -> usize {
        self.stanzas.iter().map(|s| s.len()).sum()
    }
}

/// Parameters for one poem generation request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateParams {
    /// Number of stanzas; values below 1 are clamped to 1.
    pub stanzas: usize,
    /// Lines per stanza; must be at least 2.
    pub lines_per_stanza: usize,
    /// Language whose seed corpus feeds the bigram model.
    pub language: Language,
    /// Seed keywords woven into generated lines and the rhyme pool.
    pub keywords: Vec<String>,
    /// Rhyme scheme label string, e.g. "AABB" or "ABAB".
    pub scheme: String,
}

impl Default for GenerateParams {
    fn default() -> Self {
        GenerateParams {
            stanzas: 2,
            lines_per_stanza: 4,
            language: Language::default(),
            keywords: Vec::new(),
            scheme: "AABB".to_string(),
        }
    }
}

/// Generate a single line by a bounded random walk over `table`.
///
/// With probability 0.7 a supplied keyword opens the line. Each step looks up
/// the successors of the previous token (the start marker for the first
/// step); unknown tokens fall through the table's fallback chain, so the walk
/// never gets stuck. The walk stops when it draws the end marker or the line
/// reaches `max_len` tokens, so termination is guaranteed within `max_len`
/// appends. The joined line gets its first letter capitalized.
pub fn generate_line<R: Rng + ?Sized>(
    table: &BigramTable,
    max_len: usize,
    keywords: &[String],
    rng: &mut R,
) -> String {
    let mut line: Vec<String> = Vec::new();
    if !keywords.is_empty() && rng.random_bool(KEYWORD_LEAD_PROB) {
        if let Some(kw) = keywords.choose(rng) {
            line.push(kw.clone());
        }
    }
    loop {
        let prev = line.last().map(|t| t.as_str()).unwrap_or(START_MARKER);
        let candidates = table.next_candidates(prev);
        let next = candidates
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| END_MARKER.to_string());
        if next == END_MARKER || line.len() >= max_len {
            break;
        }
        line.push(next);
    }
    capitalize(&line.join(" "))
}

/// Capitalize the first letter of `s`.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Replace the trailing word of `line` with `replacement`.
///
/// Trailing punctuation is stripped first, then the final run of word
/// characters is swapped out. A line with no trailing word is returned with
/// only the punctuation stripped.
fn replace_last_word(line: &str, replacement: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let trimmed = line.trim_end_matches(|c: char| !is_word(c));
    let mut cut = trimmed.len();
    for (i, c) in trimmed.char_indices().rev() {
        if is_word(c) {
            cut = i;
        } else {
            break;
        }
    }
    if cut == trimmed.len() {
        return trimmed.to_string();
    }
    format!("{}{}", &trimmed[..cut], replacement)
}

/// Poem generator configured for one request.
///
/// Builds the bigram table once from the language's seed corpus, then samples
/// stanzas and enforces the rhyme scheme. Every generating method takes the
/// random source explicitly.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use versecraft::generation::generator::{GenerateParams, PoemGenerator};
/// use versecraft::language::Language;
///
/// let generator = PoemGenerator::new(GenerateParams {
///     stanzas: 1,
///     lines_per_stanza: 4,
///     language: Language::English,
///     keywords: vec!["moon".to_string()],
///     scheme: "AABB".to_string(),
/// })
/// .unwrap();
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let poem = generator.generate(&mut rng);
/// assert_eq!(poem.line_count(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct PoemGenerator {
    params: GenerateParams,
    table: BigramTable,
    keywords: Vec<String>,
    corpus_tokens: Vec<String>,
}

impl PoemGenerator {
    /// Create a generator for `params`. Fails when `lines_per_stanza` is
    /// below 2, since a one-line stanza cannot carry a rhyme scheme.
    pub fn new(params: GenerateParams) -> Result<Self> {
        if params.lines_per_stanza < 2 {
            return Err(VersecraftError::generation(format!(
                "lines_per_stanza must be at least 2, got {}",
                params.lines_per_stanza
            )));
        }
        let table = BigramTable::for_language(params.language);
        let keywords: Vec<String> = params
            .keywords
            .iter()
            .filter(|k| !k.trim().is_empty())
            .map(|k| k.to_lowercase())
            .collect();
        let corpus_tokens = tokenize(params.language.corpus());
        Ok(PoemGenerator {
            params,
            table,
            keywords,
            corpus_tokens,
        })
    }

    /// The normalized seed keywords.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Generate a complete poem.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Poem {
        let groups = rhyme_groups(&self.params.scheme, self.params.lines_per_stanza);
        let stanzas = (0..self.params.stanzas.max(1))
            .map(|_| self.make_stanza(&groups, rng))
            .collect();
        Poem {
            language: self.params.language,
            stanzas,
        }
    }

    fn make_stanza<R: Rng + ?Sized>(&self, groups: &[Vec<usize>], rng: &mut R) -> Stanza {
        let mut lines: Vec<String> = Vec::new();
        for _ in 0..self.params.lines_per_stanza {
            let max_len = rng.random_range(LINE_LEN_RANGE.0..=LINE_LEN_RANGE.1);
            let mut line = generate_line(&self.table, max_len, &self.keywords, rng);
            if !self.keywords.is_empty() && rng.random_bool(KEYWORD_TAIL_PROB) && !line.is_empty()
            {
                if let Some(kw) = self.keywords.choose(rng) {
                    line.push(' ');
                    line.push_str(kw);
                }
            }
            lines.push(line);
        }
        self.enforce_scheme(&mut lines, groups, rng);
        lines
    }

    /// Rewrite end words so each rhyme group shares a key.
    ///
    /// The first line of a group sets the target key; every later line whose
    /// key differs gets its last word replaced by the first match found in a
    /// shuffled pool of keywords plus corpus tokens. Groups with no matching
    /// candidate are left unrhymed rather than failing.
    fn enforce_scheme<R: Rng + ?Sized>(
        &self,
        lines: &mut [String],
        groups: &[Vec<usize>],
        rng: &mut R,
    ) {
        let lang = self.params.language;
        for group in groups {
            let anchor = last_word(&lines[group[0]]).unwrap_or_default();
            let target = rhyme_key(&anchor, lang);
            for &j in &group[1..] {
                let current = last_word(&lines[j]).unwrap_or_default();
                if rhyme_key(&current, lang) == target {
                    continue;
                }
                let mut pool: Vec<&String> =
                    self.keywords.iter().chain(self.corpus_tokens.iter()).collect();
                pool.shuffle(rng);
                let replacement = pool
                    .into_iter()
                    .find(|c| rhyme_key(c.as_str(), lang) == target && **c != current);
                match replacement {
                    Some(word) => lines[j] = replace_last_word(&lines[j], word),
                    None => {
                        debug!("no rhyme candidate for key {target:?}; line {j} left unrhymed")
                    }
                }
            }
        }
    }
}
