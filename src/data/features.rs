// ============================================================
// Layer 4 — Feature Extractor
// ============================================================
// Computes the six real columns of the FeatureVector from the
// NORMALISED essay text: word and char counts, then the four
// readability indices. The 21 rater/trait columns are zero.

use crate::data::preprocessor::TextNormalizer;
use crate::data::readability::ReadabilityMetrics;
use crate::domain::features::{FeatureVector, FEATURE_COLUMNS, PLACEHOLDER_COUNT};

pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, normalized: &str) -> FeatureVector {
        let readability = ReadabilityMetrics::score(normalized);

        let computed = [
            TextNormalizer::word_count(normalized) as f64,
            normalized.chars().count() as f64,
            readability.flesch_reading_ease,
            readability.gunning_fog,
            readability.smog_index,
            readability.automated_readability_index,
        ];

        tracing::debug!(
            "Features: {}",
            FEATURE_COLUMNS[PLACEHOLDER_COUNT..]
                .iter()
                .zip(&computed)
                .map(|(column, value)| format!("{column}={value:.2}"))
                .collect::<Vec<_>>()
                .join(" ")
        );

        FeatureVector::from_computed(computed)
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::features::FEATURE_COUNT;

    #[test]
    fn test_vector_shape_and_placeholders() {
        let fv = FeatureExtractor::new().extract("the cat sat on the mat");
        assert_eq!(fv.len(), 27);
        assert!(fv.values()[..PLACEHOLDER_COUNT].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_counts_land_in_their_columns() {
        let fv = FeatureExtractor::new().extract("the cat sat on the mat");
        assert_eq!(fv.get("word_count"), Some(6.0));
        assert_eq!(fv.get("char_count"), Some(22.0));
        assert_eq!(fv.get("smog_index"), Some(0.0));
        assert_eq!(fv.get("not_a_column"), None);
    }

    #[test]
    fn test_empty_text() {
        let fv = FeatureExtractor::new().extract("");
        assert_eq!(fv.len(), FEATURE_COUNT);
        assert!(fv.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_f32_conversion_preserves_order() {
        let fv = FeatureExtractor::new().extract("one two three");
        let f = fv.to_f32_vec();
        assert_eq!(f.len(), FEATURE_COUNT);
        assert_eq!(f[21], 3.0);
        assert_eq!(f[22], 13.0);
    }
}
