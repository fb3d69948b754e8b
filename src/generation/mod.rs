//! Poem generation: bigram model, rhyme schemes, and the generator itself.

pub mod bigram;
pub mod generator;
pub mod scheme;

// Re-export the main entry points for convenient access
pub use bigram::{BigramTable, END_MARKER, START_MARKER};
pub use generator::{GenerateParams, Poem, PoemGenerator, Stanza, generate_line};
pub use scheme::{rhyme_groups, tile_scheme};
