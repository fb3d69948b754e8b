//! Command line argument parsing for the Versecraft CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::language::Language;

/// Versecraft - a bilingual poem generator and analyzer
#[derive(Parser, Debug, Clone)]
#[command(name = "versecraft")]
#[command(about = "A bilingual (Romanian/English) poem generator and analyzer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Versecraft Contributors")]
#[command(long_about = None)]
pub struct VersecraftArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl VersecraftArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate a poem from the embedded seed corpus
    Generate(GenerateCmdArgs),

    /// Analyze a poem and report meter, rhyme, vocabulary, and sentiment
    Analyze(AnalyzeCmdArgs),

    /// Suggest a writing theme and matching keywords
    #[command(name = "suggest-theme")]
    SuggestTheme(SuggestThemeArgs),
}

/// Arguments for poem generation
#[derive(Parser, Debug, Clone)]
pub struct GenerateCmdArgs {
    /// Language of the generated poem
    #[arg(short, long, value_enum, default_value = "ro")]
    pub language: Language,

    /// Number of stanzas
    #[arg(short = 'n', long, default_value_t = 2)]
    pub stanzas: usize,

    /// Lines per stanza
    #[arg(short = 'L', long = "lines", default_value_t = 4)]
    pub lines_per_stanza: usize,

    /// Rhyme scheme (e.g. AABB, ABAB)
    #[arg(short, long, default_value = "AABB")]
    pub scheme: String,

    /// Comma-separated seed keywords
    #[arg(short, long, value_delimiter = ',')]
    pub keywords: Vec<String>,

    /// Free-text prompt; its words seed generation when no keywords are given
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Target syllable range per line, as "low,high"
    #[arg(short, long, value_parser = parse_target_range, default_value = "8,10")]
    pub target: (usize, usize),

    /// Seed for the random source (reproducible output)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the rendered output to this file (or a directory for a
    /// timestamped filename)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for poem analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeCmdArgs {
    /// Poem file to analyze (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Language of the poem
    #[arg(short, long, value_enum, default_value = "ro")]
    pub language: Language,

    /// Target syllable range per line, as "low,high"
    #[arg(short, long, value_parser = parse_target_range, default_value = "8,10")]
    pub target: (usize, usize),

    /// Write the rendered report to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for theme suggestion
#[derive(Parser, Debug, Clone)]
pub struct SuggestThemeArgs {
    /// Language of the suggested theme
    #[arg(short, long, value_enum, default_value = "ro")]
    pub language: Language,

    /// Seed for the random source (reproducible output)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Parse a "low,high" syllable range.
fn parse_target_range(s: &str) -> Result<(usize, usize), String> {
    let (lo, hi) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"low,high\", got {s:?}"))?;
    let lo: usize = lo
        .trim()
        .parse()
        .map_err(|e| format!("invalid low bound: {e}"))?;
    let hi: usize = hi
        .trim()
        .parse()
        .map_err(|e| format!("invalid high bound: {e}"))?;
    if lo > hi {
        return Err(format!("low bound {lo} exceeds high bound {hi}"));
    }
    Ok((lo, hi))
}
