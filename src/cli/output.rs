//! Output formatting and file export for CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::AnalysisReport;
use crate::cli::args::{OutputFormat, VersecraftArgs};
use crate::error::Result;
use crate::generation::generator::Poem;
use crate::language::Language;

/// Result structure for poem generation.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationResult {
    pub language: Language,
    pub scheme: String,
    pub stanzas: Vec<Vec<String>>,
}

/// Result structure for theme suggestion.
#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeSuggestion {
    pub language: Language,
    pub theme: String,
    pub keywords: Vec<String>,
}

/// Emit a command result in the selected output format.
///
/// Human format prints the pre-rendered text; JSON serializes the structured
/// record (pretty-printed with `--pretty`).
pub fn emit<T: Serialize>(args: &VersecraftArgs, human: &str, result: &T) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{human}");
            Ok(())
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
            Ok(())
        }
    }
}

/// Render a generated poem with its bilingual header.
pub fn render_poem(poem: &Poem) -> String {
    let header = match poem.language {
        Language::Romanian => "— Poezie generată (RO) —",
        Language::English => "— Generated Poem (EN) —",
    };
    format!("{header}\n\n{}", poem.render())
}

/// Render an analysis report: numbered line table, stats block, notes, and
/// suggestions.
pub fn render_analysis(report: &AnalysisReport, language: Language) -> String {
    let label = match language {
        Language::Romanian => "Evaluare (RO)",
        Language::English => "Analysis (EN)",
    };

    let table: Vec<String> = report
        .lines
        .iter()
        .zip(&report.syllables)
        .enumerate()
        .map(|(i, (line, syl))| format!("{:>2}. [{syl}] {line}", i + 1))
        .collect();

    let stats = format!(
        "Score: {}/100\nAvg syllables: {} | σ={} | meter_fit={}\nRhyme density: {} | Vocab variety: {} | Sentiment: {}",
        report.score,
        report.avg,
        report.stdev,
        report.meter_fit,
        report.rhyme_density,
        report.vocab_variety,
        report.sentiment
    );

    let notes = if report.notes.is_empty() {
        "Bine echilibrată / Well balanced.".to_string()
    } else {
        report
            .notes
            .iter()
            .map(|n| format!("- {n}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let suggestions: Vec<String> = report
        .suggestions
        .iter()
        .map(|s| format!("• {s}"))
        .collect();

    format!(
        "— {label} —\n\n{}\n\n{stats}\n\n{notes}\n\nSugestii / Suggestions:\n{}",
        table.join("\n"),
        suggestions.join("\n")
    )
}

/// Write `content` verbatim as UTF-8 to `path`.
///
/// When `path` is an existing directory, a timestamped filename is generated
/// inside it. Returns the path actually written.
pub fn export_text(path: &Path, content: &str) -> Result<PathBuf> {
    let target = if path.is_dir() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        path.join(format!("versecraft_{stamp}.txt"))
    } else {
        path.to_path_buf()
    };
    fs::write(&target, content)?;
    Ok(target)
}
