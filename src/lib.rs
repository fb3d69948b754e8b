//! # Versecraft
//!
//! A bilingual (Romanian/English) poem generation and analysis library.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Bigram language model built from embedded seed corpora
//! - Keyword seeding and rhyme-scheme enforcement
//! - Heuristic analysis: meter fit, rhyme density, vocabulary variety, sentiment
//! - Deterministic generation via caller-supplied random sources

pub mod analysis;
pub mod cli;
pub mod error;
pub mod generation;
pub mod language;

pub mod prelude {
    pub use crate::analysis::analyzer::{AnalysisReport, PoemAnalyzer};
    pub use crate::analysis::phonetics;
    pub use crate::analysis::tokenizer::{last_word, tokenize};
    pub use crate::error::{Result, VersecraftError};
    pub use crate::generation::bigram::BigramTable;
    pub use crate::generation::generator::{GenerateParams, Poem, PoemGenerator, Stanza};
    pub use crate::language::Language;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
