// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Loads the pretrained word-level tokenizer (HuggingFace JSON
// format) and adapts it to the Sequencer trait.
//
// Conventions the pretrained model relies on:
//   - id 0 is padding and never emitted for a word
//   - words outside the vocabulary map to the tokenizer's
//     [UNK] id
//   - ids >= the model's vocab_size are DROPPED, because the
//     embedding table only has vocab_size rows (the classic
//     "num_words" cut-off of the training tokenizer)

use anyhow::Result;
use std::path::PathBuf;
use tokenizers::Tokenizer;

use crate::domain::traits::Sequencer;

const PAD_ID: u32 = 0;

pub struct TokenizerStore {
    path: PathBuf,
}

impl TokenizerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load a previously saved tokenizer from its JSON file
    pub fn load(&self) -> Result<Tokenizer> {
        let tokenizer = Tokenizer::from_file(&self.path)
            .map_err(|e| anyhow::anyhow!(
                "Cannot load tokenizer from '{}': {}", self.path.display(), e
            ))?;
        tracing::info!(
            "Tokenizer loaded from '{}' ({} entries)",
            self.path.display(),
            tokenizer.get_vocab_size(true)
        );
        Ok(tokenizer)
    }
}

/// Sequencer backed by a `tokenizers` word-level model
pub struct WordLevelSequencer {
    tokenizer:  Tokenizer,
    vocab_size: usize,
}

impl WordLevelSequencer {
    pub fn new(tokenizer: Tokenizer, vocab_size: usize) -> Self {
        Self { tokenizer, vocab_size }
    }
}

impl Sequencer for WordLevelSequencer {
    fn encode(&self, text: &str) -> Result<Vec<u32>> {
        let encoding = self.tokenizer
            .encode(text, false)
            .map_err(|e| anyhow::anyhow!("Tokenise: {e}"))?;

        Ok(encoding
            .get_ids()
            .iter()
            .copied()
            .filter(|&id| id != PAD_ID && (id as usize) < self.vocab_size)
            .collect())
    }
}
