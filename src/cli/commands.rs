// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Two subcommands:
//   score   — score an essay and print the report
//   extract — print the plain text of a .docx / .txt essay
//
// clap's derive macros generate --help, error messages for
// missing args and type conversion.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::infra::config::ScoringConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score an essay and print the score, feedback and highlights
    Score(ScoreArgs),

    /// Print the plain text of an essay file (.docx or .txt)
    Extract(ExtractArgs),
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Essay file to score (.txt or .docx)
    #[arg(long, conflicts_with = "text", required_unless_present = "text")]
    pub essay: Option<PathBuf>,

    /// Essay text given directly on the command line
    #[arg(long)]
    pub text: Option<String>,

    /// Directory holding model_config.json, model.mpk and tokenizer.json
    #[arg(long, default_value = "artifacts")]
    pub artifacts_dir: String,

    /// JSON scoring config; missing fields use built-in defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the LanguageTool server (overrides the config file)
    #[arg(long)]
    pub language_tool_url: Option<String>,

    /// Grammar checker timeout in seconds (overrides the config file)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl ScoreArgs {
    /// Apply command-line overrides on top of a loaded config.
    /// Keeps clap types out of the application layer.
    pub fn apply_overrides(&self, mut config: ScoringConfig) -> ScoringConfig {
        if let Some(url) = &self.language_tool_url {
            config.language_tool_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }
        config
    }
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Essay file (.docx or .txt)
    #[arg(long)]
    pub essay: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// {"score", "feedback", "spans", "highlighted"}
    Json,
    /// Human-readable report
    Text,
    /// Just the highlighted essay as HTML spans
    Html,
}
