// ============================================================
// Layer 3 — ScoreResult Domain Type
// ============================================================
// Everything the scoring pipeline hands back for one essay.
// Computed fresh per request and never persisted.

use serde::{Deserialize, Serialize};

use crate::domain::span::Span;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Final score in [0, 10] with one decimal of precision
    pub final_score: f64,

    /// Ordered, de-duplicated feedback lines
    pub feedback: Vec<String>,

    /// RED/GREEN partition of the original essay text
    pub spans: Vec<Span>,
}

impl ScoreResult {
    /// The score as shown to students, e.g. "8.5/10".
    pub fn score_label(&self) -> String {
        format!("{:.1}/10", self.final_score)
    }

    /// Number of spans the grammar checker flagged
    pub fn red_span_count(&self) -> usize {
        self.spans
            .iter()
            .filter(|s| s.classification == crate::domain::span::Classification::Red)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_label_always_has_one_decimal() {
        let r = ScoreResult { final_score: 10.0, feedback: vec![], spans: vec![] };
        assert_eq!(r.score_label(), "10.0/10");
        let r = ScoreResult { final_score: 0.0, feedback: vec![], spans: vec![] };
        assert_eq!(r.score_label(), "0.0/10");
        let r = ScoreResult { final_score: 8.5, feedback: vec![], spans: vec![] };
        assert_eq!(r.score_label(), "8.5/10");
    }

    #[test]
    fn test_red_span_count() {
        let r = ScoreResult {
            final_score: 7.0,
            feedback:    vec![],
            spans:       vec![Span::green(0, 2), Span::red(2, 4), Span::green(4, 9)],
        };
        assert_eq!(r.red_span_count(), 1);
    }
}
