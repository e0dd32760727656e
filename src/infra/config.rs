// ============================================================
// Layer 6 — Scoring Configuration
// ============================================================
// Process-wide settings, loaded ONCE at startup and then only
// read. Every field has a default, so a config file only needs
// the values it changes:
//
//   {
//     "language_tool_url": "http://grammar.internal:8010",
//     "good_words": ["moreover", "therefore", "notwithstanding"]
//   }
//
// CLI flags override individual fields after the file is read.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};

use crate::domain::sequence::MAX_LEN;
use crate::data::vocabulary::{GoodWords, DEFAULT_GOOD_WORDS};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Curated "advanced" words counted for the vocabulary signal
    pub good_words:        Vec<String>,
    /// Token sequence length fed to the model
    pub max_len:           usize,
    /// Normalised word count below which essays are rejected
    pub min_words:         usize,
    /// Rows in the model's embedding table
    pub vocab_size:        usize,
    /// LanguageTool language code
    pub language:          String,
    /// Base URL of the LanguageTool server
    pub language_tool_url: String,
    /// Per-request timeout for the grammar checker
    pub timeout_secs:      u64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            good_words:        DEFAULT_GOOD_WORDS.iter().map(|w| w.to_string()).collect(),
            max_len:           MAX_LEN,
            min_words:         50,
            vocab_size:        10000,
            language:          "en-US".to_string(),
            language_tool_url: "http://localhost:8081".to_string(),
            timeout_secs:      30,
        }
    }
}

impl ScoringConfig {
    /// Read a JSON config file; missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config '{}'", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Malformed config '{}'", path.display()))?;
        tracing::debug!("Loaded scoring config from '{}'", path.display());
        Ok(config)
    }

    /// Defaults, or the given file when there is one
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None    => Ok(Self::default()),
        }
    }

    pub fn good_words(&self) -> GoodWords {
        GoodWords::new(&self.good_words)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
