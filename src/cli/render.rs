// ============================================================
// Layer 1 — Report Rendering
// ============================================================
// Turns a ScoreResult into what gets printed:
//
//   json → {"score": "8.5/10", "feedback": [...],
//           "spans": [...], "highlighted": "<span ...>"}
//   text → a plain report with flagged text in [[double brackets]]
//   html → the essay as coloured <span> elements only
//
// Rejected essays print {"error": "short", "message": "..."}.

use serde::Serialize;

use crate::domain::error::ValidationError;
use crate::domain::report::ScoreResult;
use crate::domain::span::{CharIndex, Classification, Span};

#[derive(Debug, Serialize)]
pub struct ScoreResponse<'a> {
    pub score:       String,
    pub feedback:    &'a [String],
    pub spans:       &'a [Span],
    pub highlighted: String,
}

#[derive(Debug, Serialize)]
pub struct Rejection {
    pub error:   &'static str,
    pub message: String,
}

impl From<&ValidationError> for Rejection {
    fn from(err: &ValidationError) -> Self {
        Self { error: err.code(), message: err.to_string() }
    }
}

pub fn to_json(essay: &str, result: &ScoreResult) -> serde_json::Result<String> {
    let response = ScoreResponse {
        score:       result.score_label(),
        feedback:    &result.feedback,
        spans:       &result.spans,
        highlighted: to_html(essay, &result.spans),
    };
    serde_json::to_string_pretty(&response)
}

/// One <span> per highlight span, text HTML-escaped
pub fn to_html(essay: &str, spans: &[Span]) -> String {
    let index = CharIndex::new(essay);
    spans
        .iter()
        .map(|span| {
            format!(
                r#"<span style="color:{};">{}</span>"#,
                span.classification.color(),
                escape_html(span.text(&index))
            )
        })
        .collect()
}

pub fn to_text(essay: &str, result: &ScoreResult) -> String {
    let mut out = String::new();

    out.push_str("Final Score Evaluation\n");
    out.push_str(&format!("  {}\n\n", result.score_label()));

    out.push_str("Grammar Suggestions\n");
    for line in &result.feedback {
        out.push_str(&format!("  - {line}\n"));
    }

    out.push_str(&format!("\nHighlights ({} flagged)\n", result.red_span_count()));
    let index = CharIndex::new(essay);
    for span in &result.spans {
        match span.classification {
            Classification::Red   => out.push_str(&format!("[[{}]]", span.text(&index))),
            Classification::Green => out.push_str(span.text(&index)),
        }
    }
    out.push('\n');
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c   => out.push(c),
        }
    }
    out
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (&'static str, ScoreResult) {
        let essay = "Teh cat <3 fish.";
        let result = ScoreResult {
            final_score: 7.3,
            feedback:    vec!["Consider correcting the spelling of 'Teh'".to_string()],
            spans:       vec![Span::red(0, 3), Span::green(3, 16)],
        };
        (essay, result)
    }

    #[test]
    fn test_html_spans() {
        let (essay, result) = sample();
        assert_eq!(
            to_html(essay, &result.spans),
            r#"<span style="color:red;">Teh</span><span style="color:green;"> cat &lt;3 fish.</span>"#
        );
    }

    #[test]
    fn test_json_response_shape() {
        let (essay, result) = sample();
        let json: serde_json::Value = serde_json::from_str(&to_json(essay, &result).unwrap()).unwrap();
        assert_eq!(json["score"], "7.3/10");
        assert_eq!(json["feedback"][0], "Consider correcting the spelling of 'Teh'");
        assert_eq!(json["spans"][0]["classification"], "red");
        assert_eq!(json["spans"][1]["end"], 16);
        assert!(json["highlighted"].as_str().unwrap().starts_with("<span"));
    }

    #[test]
    fn test_text_report_marks_red_spans() {
        let (essay, result) = sample();
        let text = to_text(essay, &result);
        assert!(text.contains("7.3/10"));
        assert!(text.contains("[[Teh]] cat <3 fish."));
    }

    #[test]
    fn test_html_covers_long_multibyte_essay() {
        let essay = "Été naïf 😀 ok. ".repeat(500);
        let len   = essay.chars().count();
        let spans: Vec<Span> = (0..len)
            .step_by(4)
            .map(|s| if s % 8 == 0 { Span::red(s, (s + 4).min(len)) } else { Span::green(s, (s + 4).min(len)) })
            .collect();

        let html = to_html(&essay, &spans);
        let text: String = html
            .split("</span>")
            .filter_map(|part| part.split_once(";\">").map(|(_, t)| t))
            .collect();
        assert_eq!(text, essay);
        assert_eq!(html.matches("color:red;").count(), spans.len().div_ceil(2));
    }

    #[test]
    fn test_rejection_json() {
        let rejection = Rejection::from(&ValidationError::TooShort { words: 30, min: 50 });
        let json = serde_json::to_value(&rejection).unwrap();
        assert_eq!(json["error"], "short");
        assert_eq!(json["message"], "essay has 30 words; at least 50 are required");
    }
}
