// ============================================================
// Layer 3b — Grammar Span Reconciler
// ============================================================
// Turns the grammar checker's flat list of (offset, length)
// matches into a complete left-to-right cover of the essay:
//
//   text:     "Their is a erorr here."
//   matches:  (0,5) (11,5)              ← any order
//   spans:    [0,5) RED  [5,11) GREEN  [11,16) RED  [16,22) GREEN
//
// Single pass with a cursor that starts at 0:
//   1. clamp every match to [0, len) and drop the empty ones
//   2. sort by offset (stable, so equal offsets keep checker order)
//   3. for each match: emit GREEN [cursor, start) if non-empty,
//      then RED [start, end), and move the cursor to end
//   4. emit GREEN [cursor, len) if anything is left
//
// A match that starts before the cursor (overlapping the
// previous one) is trimmed to start at the cursor; if nothing
// is left it is skipped. The overlap thus becomes part of the
// earlier RED span instead of breaking the partition.
//
// Adjacent RED spans are NOT merged.

use crate::domain::grammar::GrammarMatch;
use crate::domain::span::Span;

pub struct SpanReconciler;

impl SpanReconciler {
    pub fn new() -> Self {
        Self
    }

    /// Partition [0, text_len) into RED/GREEN spans.
    /// `text_len` is the essay's length in chars.
    pub fn reconcile(&self, text_len: usize, matches: &[GrammarMatch]) -> Vec<Span> {
        // ── Step 1: clamp to the text, drop empties ──────────────────────────
        let mut errors: Vec<(usize, usize)> = matches
            .iter()
            .filter_map(|m| {
                let start = m.offset.min(text_len);
                let end   = m.end().min(text_len);
                if m.end() > text_len {
                    tracing::warn!(
                        "Grammar match [{}, {}) runs past end of text ({}), clamping",
                        m.offset, m.end(), text_len
                    );
                }
                (start < end).then_some((start, end))
            })
            .collect();

        // ── Step 2: left-to-right order ──────────────────────────────────────
        errors.sort_by_key(|&(start, _)| start);

        // ── Step 3: walk with a cursor ───────────────────────────────────────
        let mut spans  = Vec::with_capacity(errors.len() * 2 + 1);
        let mut cursor = 0usize;

        for (start, end) in errors {
            let start = if start < cursor {
                tracing::warn!("Overlapping grammar match at {start}, trimming to {cursor}");
                cursor
            } else {
                start
            };
            if end <= start {
                continue;
            }
            if cursor < start {
                spans.push(Span::green(cursor, start));
            }
            spans.push(Span::red(start, end));
            cursor = end;
        }

        // ── Step 4: trailing clean text ──────────────────────────────────────
        if cursor < text_len {
            spans.push(Span::green(cursor, text_len));
        }

        spans
    }
}

impl Default for SpanReconciler {
    fn default() -> Self {
        Self::new()
    }
}
