// ============================================================
// Layer 4 — Good-Word Vocabulary
// ============================================================
// A small curated list of "advanced" words. Every occurrence of
// one of them in the normalised essay counts towards the
// vocabulary signal used by the score boosts and the feedback.
//
// The list is loaded once at startup (defaults below, or the
// `good_words` entry of the scoring config) and never mutated.

use std::collections::HashSet;

pub const DEFAULT_GOOD_WORDS: [&str; 24] = [
    "moreover", "therefore", "consequently", "significant",
    "noteworthy", "intriguing", "persuasive", "elaborate",
    "nevertheless", "furthermore", "comprehensive", "profound",
    "insightful", "lucid", "relevant", "analytical",
    "structured", "articulate", "sophisticated", "convey",
    "illustrate", "substantiate", "compelling", "logical",
];

#[derive(Debug, Clone)]
pub struct GoodWords {
    words: HashSet<String>,
}

impl GoodWords {
    /// Build from any list of words. Entries are lowercased
    /// since they are matched against normalised text.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Count tokens of `normalized` that are good words.
    /// Repeats count every time they appear.
    pub fn count_in(&self, normalized: &str) -> usize {
        normalized
            .split_whitespace()
            .filter(|w| self.words.contains(*w))
            .count()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

impl Default for GoodWords {
    fn default() -> Self {
        Self::new(DEFAULT_GOOD_WORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl GoodWords {
        fn contains(&self, word: &str) -> bool {
            self.words.contains(word)
        }
    }

    #[test]
    fn test_default_list() {
        let gw = GoodWords::default();
        assert_eq!(gw.len(), 24);
        assert!(gw.contains("moreover"));
        assert!(!gw.contains("cat"));
    }

    #[test]
    fn test_counts_repeats() {
        let gw = GoodWords::default();
        let text = "moreover the cat is relevant and moreover logical";
        assert_eq!(gw.count_in(text), 4);
    }

    #[test]
    fn test_whole_tokens_only() {
        let gw = GoodWords::default();
        assert_eq!(gw.count_in("logically irrelevant conveyed"), 0);
    }

    #[test]
    fn test_custom_list_is_lowercased() {
        let gw = GoodWords::new(["  Splendid ", "", "Apt"]);
        assert_eq!(gw.len(), 2);
        assert_eq!(gw.count_in("a splendid and apt essay"), 2);
    }
}
