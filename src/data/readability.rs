// ============================================================
// Layer 4 — Readability Metrics
// ============================================================
// The four classic readability indices the scoring model was
// trained with, computed the way the Python `textstat` package
// computes them:
//
//   Flesch reading ease   206.835 − 1.015·ASL − 84.6·ASW      (2 dp)
//   Gunning fog           0.4·(ASL + 100·poly/words)          (2 dp)
//   SMOG                  1.043·√(poly·30/sentences) + 3.1291 (1 dp)
//                         only when there are ≥ 3 sentences
//   ARI                   4.71·chars/words + 0.5·ASL − 21.43  (1 dp)
//
//   ASL  = words / sentences
//   ASW  = syllables / words
//   poly = words with three or more syllables
//
// Sentences are regex segments ending in . ! or ?, and segments
// of two words or fewer do not count. Normalised essays have no
// punctuation left, so they are always a single sentence.
//
// Syllables use a vowel-group heuristic instead of a
// hyphenation dictionary, so values can differ slightly from
// textstat on unusual words.
//
// Any index whose denominator would be zero is reported as 0.0.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::scoring::round_to;

static SENTENCE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn sentence_pattern() -> &'static Regex {
    SENTENCE_PATTERN.get_or_init(|| Regex::new(r"\b[^.!?]+[.!?]*").expect("valid regex"))
}

/// The four indices, in the order the feature vector stores them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScores {
    pub flesch_reading_ease:         f64,
    pub gunning_fog:                 f64,
    pub smog_index:                  f64,
    pub automated_readability_index: f64,
}

/// Raw counts every index is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub words:         usize,
    pub sentences:     usize,
    pub syllables:     usize,
    pub polysyllables: usize,
    /// Non-whitespace chars
    pub chars:         usize,
}

impl TextStats {
    pub fn collect(text: &str) -> Self {
        let words: Vec<String> = lexicon(text);
        let syllable_counts: Vec<usize> = words.iter().map(|w| syllable_count(w)).collect();

        Self {
            words:         words.len(),
            sentences:     sentence_count(text),
            syllables:     syllable_counts.iter().sum(),
            polysyllables: syllable_counts.iter().filter(|&&n| n >= 3).count(),
            chars:         text.chars().filter(|c| !c.is_whitespace()).count(),
        }
    }

    fn avg_sentence_length(&self) -> f64 {
        self.words as f64 / self.sentences.max(1) as f64
    }
}

pub struct ReadabilityMetrics;

impl ReadabilityMetrics {
    pub fn score(text: &str) -> ReadabilityScores {
        let stats = TextStats::collect(text);
        ReadabilityScores {
            flesch_reading_ease:         flesch_reading_ease(&stats),
            gunning_fog:                 gunning_fog(&stats),
            smog_index:                  smog_index(&stats),
            automated_readability_index: automated_readability_index(&stats),
        }
    }
}

pub fn flesch_reading_ease(stats: &TextStats) -> f64 {
    if stats.words == 0 {
        return 0.0;
    }
    let asw = stats.syllables as f64 / stats.words as f64;
    round_to(206.835 - 1.015 * stats.avg_sentence_length() - 84.6 * asw, 2)
}

pub fn gunning_fog(stats: &TextStats) -> f64 {
    if stats.words == 0 {
        return 0.0;
    }
    let per_difficult = stats.polysyllables as f64 / stats.words as f64 * 100.0;
    round_to(0.4 * (stats.avg_sentence_length() + per_difficult), 2)
}

pub fn smog_index(stats: &TextStats) -> f64 {
    if stats.sentences < 3 {
        return 0.0;
    }
    let poly = stats.polysyllables as f64 * (30.0 / stats.sentences as f64);
    round_to(1.043 * poly.sqrt() + 3.1291, 1)
}

pub fn automated_readability_index(stats: &TextStats) -> f64 {
    if stats.words == 0 {
        return 0.0;
    }
    let chars_per_word = stats.chars as f64 / stats.words as f64;
    round_to(4.71 * chars_per_word + 0.5 * stats.avg_sentence_length() - 21.43, 1)
}

/// Words with punctuation removed; empty leftovers are dropped.
fn lexicon(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.chars().filter(|c| !c.is_ascii_punctuation()).collect::<String>())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Sentence segments, ignoring those of two words or fewer.
/// Never less than 1.
pub fn sentence_count(text: &str) -> usize {
    let segments: Vec<&str> = sentence_pattern()
        .find_iter(text)
        .map(|m| m.as_str())
        .collect();
    let ignored = segments.iter().filter(|s| lexicon(s).len() <= 2).count();
    segments.len().saturating_sub(ignored).max(1)
}

/// Vowel-group syllable estimate for a single word (minimum 1).
pub fn syllable_count(word: &str) -> usize {
    let word = word.to_lowercase();
    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut count  = 0usize;
    let mut prev_v = false;
    for c in word.chars() {
        let v = is_vowel(c);
        if v && !prev_v {
            count += 1;
        }
        prev_v = v;
    }

    // Silent trailing "e" ("make"), but not "-le" ("table")
    if count > 1 && word.ends_with('e') && !word.ends_with("le") {
        count -= 1;
    }
    count.max(1)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn test_syllable_count() {
        assert_eq!(syllable_count("cat"), 1);
        assert_eq!(syllable_count("the"), 1);
        assert_eq!(syllable_count("make"), 1);
        assert_eq!(syllable_count("table"), 2);
        assert_eq!(syllable_count("beautiful"), 3);
        assert_eq!(syllable_count("education"), 4);
        assert_eq!(syllable_count("rhythm"), 1);
        assert_eq!(syllable_count("2024"), 1);
    }

    #[test]
    fn test_sentence_count_ignores_short_fragments() {
        assert_eq!(sentence_count("the cat sat on the mat"), 1);
        assert_eq!(sentence_count("The cat sat. The dog ran off. Yes!"), 2);
        assert_eq!(sentence_count(""), 1);
    }

    #[test]
    fn test_collect_stats() {
        let stats = TextStats::collect("the cat sat on the beautiful mat");
        assert_eq!(stats.words, 7);
        assert_eq!(stats.sentences, 1);
        assert_eq!(stats.syllables, 9);
        assert_eq!(stats.polysyllables, 1);
        assert_eq!(stats.chars, 26);
    }

    #[test]
    fn test_simple_sentence_indices() {
        let scores = ReadabilityMetrics::score("the cat sat on the mat");
        // 206.835 − 1.015·6 − 84.6·1
        assert!(approx(scores.flesch_reading_ease, 116.145, 0.01));
        // 0.4·(6 + 0)
        assert!(approx(scores.gunning_fog, 2.4, 1e-9));
        // fewer than three sentences
        assert_eq!(scores.smog_index, 0.0);
        // 4.71·17/6 + 0.5·6 − 21.43
        assert!(approx(scores.automated_readability_index, -5.085, 0.06));
    }

    #[test]
    fn test_smog_with_three_sentences() {
        let text = "Education matters greatly today. Every community benefits enormously. \
                    Libraries provide opportunity.";
        let stats = TextStats::collect(text);
        assert_eq!(stats.sentences, 3);
        let expected = 1.043 * ((stats.polysyllables as f64) * 10.0).sqrt() + 3.1291;
        assert!(approx(smog_index(&stats), expected, 0.05));
    }

    #[test]
    fn test_empty_text_is_all_zero() {
        let scores = ReadabilityMetrics::score("");
        assert_eq!(scores.flesch_reading_ease, 0.0);
        assert_eq!(scores.gunning_fog, 0.0);
        assert_eq!(scores.smog_index, 0.0);
        assert_eq!(scores.automated_readability_index, 0.0);
    }
}
