// ============================================================
// Layer 4 — Essay Validator
// ============================================================
// Runs before ANY scoring work. An essay is rejected when:
//
//   1. it is empty or whitespace only          → Empty
//   2. it has no ASCII letter at all           → NonAlphabetic
//   3. its normalised form has < min words     → TooShort
//
// Checks run in that order and the first failure wins.

use crate::data::preprocessor::TextNormalizer;
use crate::domain::error::ValidationError;

pub struct EssayValidator {
    min_words: usize,
}

impl EssayValidator {
    pub fn new(min_words: usize) -> Self {
        Self { min_words }
    }

    /// Validate the raw essay against its normalised form.
    pub fn validate(&self, raw: &str, normalized: &str) -> Result<(), ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::Empty);
        }
        if !raw.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::NonAlphabetic);
        }
        let words = TextNormalizer::word_count(normalized);
        if words < self.min_words {
            return Err(ValidationError::TooShort { words, min: self.min_words });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(raw: &str) -> Result<(), ValidationError> {
        let normalized = TextNormalizer::new().normalize(raw);
        EssayValidator::new(50).validate(raw, &normalized)
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(check(""), Err(ValidationError::Empty));
        assert_eq!(check("  \n\t"), Err(ValidationError::Empty));
    }

    #[test]
    fn test_no_letters() {
        assert_eq!(check("12345 678 !!!"), Err(ValidationError::NonAlphabetic));
        assert_eq!(check("ÄÖÜ ßç"), Err(ValidationError::NonAlphabetic));
    }

    #[test]
    fn test_too_short() {
        let thirty = vec!["word"; 30].join(" ");
        assert_eq!(
            check(&thirty),
            Err(ValidationError::TooShort { words: 30, min: 50 })
        );
    }

    #[test]
    fn test_word_count_uses_normalised_text() {
        // 50 raw tokens, but the dashes vanish after normalisation
        let mut parts = vec!["word"; 48];
        parts.push("—");
        parts.push("—");
        assert!(matches!(check(&parts.join(" ")), Err(ValidationError::TooShort { words: 48, .. })));
    }

    #[test]
    fn test_exactly_min_words_passes() {
        let fifty = vec!["word"; 50].join(" ");
        assert_eq!(check(&fifty), Ok(()));
    }
}
