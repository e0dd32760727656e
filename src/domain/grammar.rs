// ============================================================
// Layer 3 — GrammarMatch Domain Type
// ============================================================
// One issue reported by the external grammar checker.
//
// Example:
//   text:    "This is an exampel sentence."
//   offset:  11, length: 7  →  "exampel"
//   message: "Possible spelling mistake found."
//   replacements: ["example", "examples"]
//
// Matches arrive in whatever order the checker returns them.
// They are NOT guaranteed to be sorted, and a misbehaving
// checker may even return overlapping or out-of-range matches;
// the span reconciler deals with both.

use serde::{Deserialize, Serialize};

use crate::domain::span::CharIndex;

/// The exact message the checker uses for misspellings.
/// Feedback rewrites it into a concrete suggestion.
pub const SPELLING_MESSAGE: &str = "Possible spelling mistake found.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarMatch {
    /// Char offset of the first flagged character
    pub offset: usize,

    /// Number of flagged chars
    pub length: usize,

    /// Human-readable description of the problem
    pub message: String,

    /// Suggested replacements, best first
    pub replacements: Vec<String>,
}

impl GrammarMatch {
    pub fn new(
        offset:  usize,
        length:  usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            offset,
            length,
            message:      message.into(),
            replacements: Vec::new(),
        }
    }

    /// Builder-style helper for attaching replacement suggestions
    pub fn with_replacements<I, S>(mut self, replacements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.replacements = replacements.into_iter().map(Into::into).collect();
        self
    }

    /// Exclusive end offset (offset + length), saturating
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }

    pub fn is_spelling(&self) -> bool {
        self.message == SPELLING_MESSAGE
    }

    /// The flagged text itself, sliced from the original essay
    /// by char offsets. Out-of-range parts are simply cut off.
    pub fn flagged_text<'a>(&self, index: &CharIndex<'a>) -> &'a str {
        index.slice(self.offset, self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flagged_text_uses_char_offsets() {
        let m = GrammarMatch::new(5, 7, SPELLING_MESSAGE);
        assert_eq!(m.flagged_text(&CharIndex::new("Très exampel here")), "exampel");
        assert!(m.is_spelling());
    }

    #[test]
    fn test_flagged_text_out_of_range_is_truncated() {
        let m = GrammarMatch::new(3, 100, "Whatever.");
        let index = CharIndex::new("abcdef");
        assert_eq!(m.flagged_text(&index), "def");
        let m = GrammarMatch::new(50, 2, "Whatever.");
        assert_eq!(m.flagged_text(&index), "");
    }
}
