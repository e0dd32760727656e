// ============================================================
// Layer 3 — Highlight Span
// ============================================================
// A Span tags the char range [start, end) of the essay as
// either RED (the grammar checker flagged it) or GREEN (clean).
//
// The spans produced for one essay always form a partition:
//
//   text:   "I has a apple and it are red."
//   spans:  [0,2) G  [2,5) R  [5,6) G  [6,7) R  [7,...) G ...
//
//   - sorted by start
//   - contiguous: each span starts where the previous ended
//   - non-empty: start < end
//   - first starts at 0, last ends at the essay's char length

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Flagged by the grammar checker
    Red,
    /// Nothing to report
    Green,
}

impl Classification {
    /// CSS colour name used when rendering the span
    pub fn color(&self) -> &'static str {
        match self {
            Classification::Red   => "red",
            Classification::Green => "green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start:          usize,
    pub end:            usize,
    pub classification: Classification,
}

impl Span {
    pub fn red(start: usize, end: usize) -> Self {
        Self { start, end, classification: Classification::Red }
    }

    pub fn green(start: usize, end: usize) -> Self {
        Self { start, end, classification: Classification::Green }
    }

    /// The covered text, sliced by char offsets
    pub fn text<'a>(&self, index: &CharIndex<'a>) -> &'a str {
        index.slice(self.start, self.end)
    }
}

/// Byte offset of every char boundary in one essay, built once
/// so each slice by char offsets is O(1).
pub struct CharIndex<'a> {
    text:   &'a str,
    /// bounds[i] = byte offset where char i begins; last entry is text.len()
    bounds: Vec<usize>,
}

impl<'a> CharIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let bounds = text
            .char_indices()
            .map(|(b, _)| b)
            .chain(std::iter::once(text.len()))
            .collect();
        Self { text, bounds }
    }

    pub fn char_len(&self) -> usize {
        self.bounds.len() - 1
    }

    /// Slice by char indices [start, end). Indices past the end
    /// are clamped, so this never panics.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        if start >= end {
            return "";
        }
        let last = self.char_len();
        let from = self.bounds[start.min(last)];
        let to   = self.bounds[end.min(last)];
        &self.text[from..to]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_multibyte() {
        let index = CharIndex::new("naïve text");
        assert_eq!(index.char_len(), 10);
        assert_eq!(index.slice(0, 5), "naïve");
        assert_eq!(index.slice(6, 10), "text");
    }

    #[test]
    fn test_slice_clamps() {
        let index = CharIndex::new("abc");
        assert_eq!(index.slice(1, 99), "bc");
        assert_eq!(index.slice(5, 9), "");
        assert_eq!(index.slice(2, 1), "");
        assert_eq!(index.slice(0, usize::MAX), "abc");
        assert_eq!(CharIndex::new("").slice(0, 3), "");
    }

    #[test]
    fn test_span_text_over_many_spans() {
        let essay = "Thé cat 😀 sat.".repeat(200);
        let index = CharIndex::new(&essay);
        let spans: Vec<Span> = (0..index.char_len())
            .step_by(3)
            .map(|s| Span::green(s, (s + 3).min(index.char_len())))
            .collect();
        let rebuilt: String = spans.iter().map(|s| s.text(&index)).collect();
        assert_eq!(rebuilt, essay);
    }

    #[test]
    fn test_classification_serialises_lowercase() {
        let json = serde_json::to_string(&Span::red(0, 3)).unwrap();
        assert_eq!(json, r#"{"start":0,"end":3,"classification":"red"}"#);
    }
}
