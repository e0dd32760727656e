// ============================================================
// Layer 4 — Text Normaliser
// ============================================================
// Reduces raw essay text to the form the tokenizer and the
// readability features were trained on.
//
// Cleaning steps (applied in order):
//   1. Lowercase everything
//   2. Newlines become spaces
//   3. Drop every char outside [a-zA-Z0-9] and whitespace
//   4. Collapse whitespace runs into a single space
//   5. Trim both ends
//
// Example:
//   "The  Cat's\nhat — isn't RED!"  →  "the cats hat isnt red"
//
// The normaliser is a pure function of its input, and running
// it twice gives the same result as running it once.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalise raw essay text. Takes a &str and returns an owned String.
    pub fn normalize(&self, text: &str) -> String {
        // ── Steps 1–3: lowercase, then keep only ASCII alphanumerics and whitespace ──
        // Lowercasing first matters: some uppercase chars lowercase
        // into an ASCII letter plus a combining mark.
        let kept: String = text
            .to_lowercase()
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
            .collect();

        // ── Steps 4–5: collapse runs and trim ───────────────────────────────
        kept.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Number of whitespace-separated words in already-normalised text
    pub fn word_count(normalized: &str) -> usize {
        normalized.split_whitespace().count()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
