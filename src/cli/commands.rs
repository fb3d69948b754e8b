//! Command implementations for the Versecraft CLI.

use std::fs;
use std::io;

use log::debug;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::analysis::analyzer::PoemAnalyzer;
use crate::analysis::phonetics::line_syllables;
use crate::analysis::tokenizer::tokenize;
use crate::cli::args::{AnalyzeCmdArgs, Command, GenerateCmdArgs, SuggestThemeArgs, VersecraftArgs};
use crate::cli::output::{self, GenerationResult, ThemeSuggestion};
use crate::error::Result;
use crate::generation::generator::{GenerateParams, Poem, PoemGenerator, capitalize};

/// Execute a CLI command.
pub fn execute_command(args: VersecraftArgs) -> Result<()> {
    match &args.command {
        Command::Generate(generate_args) => generate(generate_args.clone(), &args),
        Command::Analyze(analyze_args) => analyze(analyze_args.clone(), &args),
        Command::SuggestTheme(theme_args) => suggest_theme(theme_args.clone(), &args),
    }
}

/// A seeded random source when `--seed` was given, OS entropy otherwise.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generate a poem.
fn generate(args: GenerateCmdArgs, cli_args: &VersecraftArgs) -> Result<()> {
    let mut rng = make_rng(args.seed);

    let prompt_tokens = args.prompt.as_deref().map(tokenize).unwrap_or_default();
    let mut keywords: Vec<String> = args
        .keywords
        .iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect();
    if keywords.is_empty() {
        // The prompt's own words seed generation when no keywords are given.
        keywords = prompt_tokens.clone();
    }
    let scheme = match args.scheme.trim() {
        "" => "AABB".to_string(),
        s => s.to_uppercase(),
    };

    let generator = PoemGenerator::new(GenerateParams {
        stanzas: args.stanzas.max(1),
        lines_per_stanza: args.lines_per_stanza.max(2),
        language: args.language,
        keywords: keywords.clone(),
        scheme: scheme.clone(),
    })?;
    let mut poem = generator.generate(&mut rng);
    fit_lines_to_target(&mut poem, args.target, &keywords, &prompt_tokens, &mut rng);

    if cli_args.verbosity() > 1 {
        println!(
            "Generated {} stanza(s) of {} line(s) in {}",
            poem.stanzas.len(),
            args.lines_per_stanza.max(2),
            args.language
        );
    }

    let rendered = output::render_poem(&poem);
    let result = GenerationResult {
        language: args.language,
        scheme,
        stanzas: poem.stanzas.clone(),
    };
    output::emit(cli_args, &rendered, &result)?;

    if let Some(path) = &args.output {
        let written = output::export_text(path, &rendered)?;
        if cli_args.verbosity() > 0 {
            eprintln!("Saved to {}", written.display());
        }
    }
    Ok(())
}

/// Nudge generated lines toward the target syllable range.
///
/// Lines under the low bound get one keyword (or prompt word) appended;
/// lines over the high bound with more than three tokens lose their last
/// token and are re-capitalized.
fn fit_lines_to_target<R: Rng + ?Sized>(
    poem: &mut Poem,
    target: (usize, usize),
    keywords: &[String],
    prompt_tokens: &[String],
    rng: &mut R,
) {
    let (lo, hi) = target;
    let lang = poem.language;
    for stanza in &mut poem.stanzas {
        for line in stanza.iter_mut() {
            let syllables = line_syllables(line, lang);
            if syllables < lo {
                let pool = if keywords.is_empty() { prompt_tokens } else { keywords };
                if let Some(word) = pool.choose(rng) {
                    debug!("padding short line ({syllables} < {lo}) with {word:?}");
                    if line.is_empty() {
                        *line = capitalize(word);
                    } else {
                        line.push(' ');
                        line.push_str(word);
                    }
                }
            } else if syllables > hi {
                let tokens = tokenize(line);
                if tokens.len() > 3 {
                    debug!("trimming long line ({syllables} > {hi})");
                    *line = capitalize(&tokens[..tokens.len() - 1].join(" "));
                }
            }
        }
    }
}

/// Analyze a poem from a file or stdin.
fn analyze(args: AnalyzeCmdArgs, cli_args: &VersecraftArgs) -> Result<()> {
    let text = match &args.input {
        Some(path) => {
            if cli_args.verbosity() > 1 {
                println!("Reading poem from: {}", path.display());
            }
            fs::read_to_string(path)?
        }
        None => io::read_to_string(io::stdin())?,
    };

    let analyzer = PoemAnalyzer::new(args.language, args.target)?;
    let report = analyzer.analyze(&text)?;

    let rendered = output::render_analysis(&report, args.language);
    output::emit(cli_args, &rendered, &report)?;

    if let Some(path) = &args.output {
        let written = output::export_text(path, &rendered)?;
        if cli_args.verbosity() > 0 {
            eprintln!("Saved to {}", written.display());
        }
    }
    Ok(())
}

/// Suggest a writing theme and derive keywords from it.
fn suggest_theme(args: SuggestThemeArgs, cli_args: &VersecraftArgs) -> Result<()> {
    let mut rng = make_rng(args.seed);
    let theme = args
        .language
        .themes()
        .choose(&mut rng)
        .copied()
        .unwrap_or_default();
    let keywords: Vec<String> = tokenize(theme)
        .into_iter()
        .filter(|w| w.chars().count() > 3)
        .take(3)
        .collect();

    let human = format!("Theme: {theme}\nKeywords: {}", keywords.join(", "));
    output::emit(
        cli_args,
        &human,
        &ThemeSuggestion {
            language: args.language,
            theme: theme.to_string(),
            keywords,
        },
    )
}
