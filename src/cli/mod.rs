// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and delegates the real work to Layer 2.
//
//   essay-scorer score   --essay essay.docx [--format text]
//   essay-scorer extract --essay essay.docx
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

/// JSON / text / HTML rendering of results
pub mod render;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, ExtractArgs, OutputFormat, ScoreArgs};

use crate::domain::error::ScoringError;
use crate::domain::essay::Essay;
use crate::domain::traits::EssaySource;

#[derive(Parser, Debug)]
#[command(
    name = "essay-scorer",
    version,
    about = "Score student essays and get grammar feedback."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the chosen subcommand. This layer only routes
    /// and prints, it never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Score(args)   => run_score(args),
            Commands::Extract(args) => run_extract(args),
        }
    }
}

fn run_score(args: ScoreArgs) -> Result<()> {
    use crate::application::score_use_case::ScoreUseCase;
    use crate::infra::config::ScoringConfig;

    let config = ScoringConfig::load_or_default(args.config.as_deref())?;
    let config = args.apply_overrides(config);

    let essay = match (&args.essay, &args.text) {
        (Some(path), _)    => crate::data::loader::EssayFile::new(path).load()?,
        (None, Some(text)) => Essay::new("inline", text.clone()),
        (None, None)       => anyhow::bail!("either --essay or --text is required"),
    };
    tracing::info!("Scoring essay '{}' ({} chars)", essay.source, essay.char_len());

    // Loaded once up front: a missing model is fatal before any essay work.
    let use_case = ScoreUseCase::from_artifacts(config, &args.artifacts_dir)
        .context("Failed to load the pretrained scoring artifacts")?;

    match use_case.score(&essay.text) {
        Ok(result) => {
            let output = match args.format {
                OutputFormat::Json => render::to_json(&essay.text, &result)?,
                OutputFormat::Text => render::to_text(&essay.text, &result),
                OutputFormat::Html => render::to_html(&essay.text, &result.spans),
            };
            println!("{output}");
            Ok(())
        }
        Err(ScoringError::Validation(err)) => {
            tracing::warn!("Essay rejected: {err}");
            println!("{}", serde_json::to_string_pretty(&render::Rejection::from(&err))?);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    let essay = crate::data::loader::EssayFile::new(&args.essay).load()?;
    println!("{}", essay.text);
    Ok(())
}
