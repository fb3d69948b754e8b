//! Text analysis: tokenization, phonetic heuristics, and the poem analyzer.

pub mod analyzer;
pub mod phonetics;
pub mod tokenizer;

// Re-export the main entry points for convenient access
pub use analyzer::{AnalysisReport, PoemAnalyzer, Sentiment};
pub use phonetics::{line_syllables, rhyme_key, syllable_count};
pub use tokenizer::{WordTokenizer, last_word, tokenize};
