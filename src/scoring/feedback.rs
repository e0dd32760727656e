// ============================================================
// Layer 3b — Feedback Composer
// ============================================================
// Builds the ordered feedback list shown to the student.
//
// Part (a), grammar messages:
//   every checker message in the order it was reported, with
//   duplicates removed. The generic spelling message is
//   rewritten into a concrete suggestion:
//
//     "Possible spelling mistake found." on "recieve"
//       → "Consider correcting the spelling of 'recieve' (e.g., receive)"
//
// Part (b), fixed remarks appended after the grammar messages,
// always in this order:
//
//   errors == 0        → Excellent grammar usage.
//   words ≥ 200        → Essay has sufficient length and structure.
//   good words ≥ 2     → Strong use of advanced vocabulary.
//   good words < 2     → Use interesting words like ...
//   words < 200        → Add more valuable content to your essay.
//   else errors > 5    → Consider correcting the spelling errors ...
//
// The number of distinct grammar messages from part (a) is the
// grammar error count the score composer works with.

use std::collections::HashSet;

use crate::domain::grammar::GrammarMatch;
use crate::domain::span::CharIndex;
use crate::scoring::composer::{ScoreSignals, ERROR_HEAVY, LONG_ESSAY_WORDS};

pub const EXCELLENT_GRAMMAR:  &str = "Excellent grammar usage.";
pub const SUFFICIENT_LENGTH:  &str = "Essay has sufficient length and structure.";
pub const STRONG_VOCABULARY:  &str = "Strong use of advanced vocabulary.";
pub const SUGGEST_VOCABULARY: &str =
    "Use interesting words like moreover, therefore, consequently, significant to enhance your essay.";
pub const NEEDS_CONTENT:      &str = "Add more valuable content to your essay.";
pub const FIX_SPELLING:       &str = "Consider correcting the spelling errors in your essay.";

/// How many replacement suggestions a spelling hint lists
const MAX_SUGGESTIONS: usize = 3;

pub struct FeedbackComposer;

impl FeedbackComposer {
    pub fn new() -> Self {
        Self
    }

    /// Part (a): distinct checker messages, in encounter order.
    pub fn grammar_messages(&self, text: &str, matches: &[GrammarMatch]) -> Vec<String> {
        let index        = CharIndex::new(text);
        let mut seen     = HashSet::new();
        let mut messages = Vec::new();

        for m in matches {
            let message = if m.is_spelling() {
                spelling_suggestion(&index, m)
            } else {
                m.message.clone()
            };
            if seen.insert(message.clone()) {
                messages.push(message);
            }
        }

        messages
    }

    /// Part (b): append the threshold remarks to the grammar messages.
    pub fn compose(&self, grammar_messages: Vec<String>, signals: &ScoreSignals) -> Vec<String> {
        let errors = signals.grammar_error_count;
        let words  = signals.word_count;
        let good   = signals.good_word_count;

        let mut remarks = Vec::new();
        if errors == 0 {
            remarks.push(EXCELLENT_GRAMMAR);
        }
        if words >= LONG_ESSAY_WORDS {
            remarks.push(SUFFICIENT_LENGTH);
        }
        if good >= 2 {
            remarks.push(STRONG_VOCABULARY);
        } else {
            remarks.push(SUGGEST_VOCABULARY);
        }
        if words < LONG_ESSAY_WORDS {
            remarks.push(NEEDS_CONTENT);
        } else if errors > ERROR_HEAVY {
            remarks.push(FIX_SPELLING);
        }

        let mut feedback = grammar_messages;
        for remark in remarks {
            if !feedback.iter().any(|f| f == remark) {
                feedback.push(remark.to_string());
            }
        }
        feedback
    }
}

impl Default for FeedbackComposer {
    fn default() -> Self {
        Self::new()
    }
}

fn spelling_suggestion(index: &CharIndex, m: &GrammarMatch) -> String {
    let mut suggestion = format!(
        "Consider correcting the spelling of '{}'",
        m.flagged_text(index)
    );
    if !m.replacements.is_empty() {
        let options: Vec<&str> = m
            .replacements
            .iter()
            .take(MAX_SUGGESTIONS)
            .map(String::as_str)
            .collect();
        suggestion.push_str(&format!(" (e.g., {})", options.join(", ")));
    }
    suggestion
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grammar::SPELLING_MESSAGE;

    fn signals(errors: usize, words: usize, good: usize) -> ScoreSignals {
        ScoreSignals {
            raw_model_score:     0.5,
            grammar_error_count: errors,
            word_count:          words,
            good_word_count:     good,
        }
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        let matches = vec![
            GrammarMatch::new(0, 1, "B issue."),
            GrammarMatch::new(2, 1, "A issue."),
            GrammarMatch::new(4, 1, "B issue."),
            GrammarMatch::new(6, 1, "C issue."),
        ];
        let msgs = FeedbackComposer::new().grammar_messages("a b c d e f g h", &matches);
        assert_eq!(msgs, vec!["B issue.", "A issue.", "C issue."]);
    }

    #[test]
    fn test_spelling_message_is_rewritten() {
        let text = "I will recieve it.";
        let m = GrammarMatch::new(7, 7, SPELLING_MESSAGE)
            .with_replacements(["receive", "relieve", "reprieve", "recede"]);
        let msgs = FeedbackComposer::new().grammar_messages(text, &[m]);
        assert_eq!(
            msgs,
            vec!["Consider correcting the spelling of 'recieve' (e.g., receive, relieve, reprieve)"]
        );
    }

    #[test]
    fn test_spelling_without_replacements() {
        let m = GrammarMatch::new(0, 5, SPELLING_MESSAGE);
        let msgs = FeedbackComposer::new().grammar_messages("Xyzzy is odd.", &[m]);
        assert_eq!(msgs, vec!["Consider correcting the spelling of 'Xyzzy'"]);
    }

    #[test]
    fn test_same_misspelling_twice_dedups_after_rewrite() {
        let text = "teh cat and teh dog";
        let matches = vec![
            GrammarMatch::new(0, 3, SPELLING_MESSAGE).with_replacements(["the"]),
            GrammarMatch::new(12, 3, SPELLING_MESSAGE).with_replacements(["the"]),
        ];
        let msgs = FeedbackComposer::new().grammar_messages(text, &matches);
        assert_eq!(msgs.len(), 1);
    }

    #[test]
    fn test_long_clean_rich_essay_remarks() {
        let fb = FeedbackComposer::new().compose(Vec::new(), &signals(0, 250, 3));
        assert_eq!(fb, vec![EXCELLENT_GRAMMAR, SUFFICIENT_LENGTH, STRONG_VOCABULARY]);
    }

    #[test]
    fn test_short_essay_remarks() {
        let fb = FeedbackComposer::new().compose(vec!["Issue.".into()], &signals(1, 120, 1));
        assert_eq!(fb, vec!["Issue.", SUGGEST_VOCABULARY, NEEDS_CONTENT]);
    }

    #[test]
    fn test_fix_spelling_only_for_long_essays() {
        let grammar: Vec<String> = (0..6).map(|i| format!("Issue {i}.")).collect();

        let fb = FeedbackComposer::new().compose(grammar.clone(), &signals(6, 220, 2));
        assert_eq!(&fb[6..], &[SUFFICIENT_LENGTH, STRONG_VOCABULARY, FIX_SPELLING]);

        let fb = FeedbackComposer::new().compose(grammar, &signals(6, 150, 2));
        assert!(!fb.iter().any(|f| f == FIX_SPELLING));
        assert_eq!(fb.last().map(String::as_str), Some(NEEDS_CONTENT));
    }

    #[test]
    fn test_vocabulary_remarks_are_exclusive() {
        for good in 0..5 {
            let fb = FeedbackComposer::new().compose(Vec::new(), &signals(0, 250, good));
            let strong  = fb.iter().any(|f| f == STRONG_VOCABULARY);
            let suggest = fb.iter().any(|f| f == SUGGEST_VOCABULARY);
            assert!(strong ^ suggest, "good={good}");
        }
    }
}
