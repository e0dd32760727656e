// ============================================================
// Layer 3 — Essay Domain Type
// ============================================================
// A single essay submitted for scoring. The text is kept
// exactly as the student wrote it: grammar offsets and
// highlight spans all point into this original string, so it
// must never be normalised in place.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Essay {
    /// The filename the essay was read from, or "inline"
    pub source: String,

    /// The untouched essay text
    pub text: String,
}

impl Essay {
    /// Create a new Essay with a source label and text content.
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }

    /// Length of the essay in chars. This is the upper bound
    /// of the span partition produced for this essay.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
