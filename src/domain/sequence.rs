// ============================================================
// Layer 3 — Token Sequence
// ============================================================
// The model reads exactly `max_len` token ids per essay.
//
//   ids shorter than max_len  → right-padded with 0
//   ids longer than max_len   → the tail is cut off
//
// Example with max_len = 6:
//   [12, 7, 99]                → [12, 7, 99, 0, 0, 0]
//   [1, 2, 3, 4, 5, 6, 7, 8]   → [1, 2, 3, 4, 5, 6]
//
// Id 0 is reserved for padding and never produced by the
// tokenizer for a real word.

use serde::{Deserialize, Serialize};

/// Sequence length the pretrained model was trained on
pub const MAX_LEN: usize = 300;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSequence {
    ids: Vec<u32>,
}

impl TokenSequence {
    /// Pad or truncate `ids` to exactly `max_len`
    pub fn from_ids(mut ids: Vec<u32>, max_len: usize) -> Self {
        ids.truncate(max_len);
        ids.resize(max_len, 0);
        Self { ids }
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of leading real tokens before the padding starts
    pub fn content_len(&self) -> usize {
        self.ids.iter().position(|&id| id == 0).unwrap_or(self.ids.len())
    }
}
