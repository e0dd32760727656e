// ============================================================
// Layer 3 — Feature Vector
// ============================================================
// The 27-value numeric row that sits next to the token
// sequence in the model.
//
// Layout (must match training EXACTLY; the model has no way
// to notice a shifted column, it just predicts garbage):
//
//   [0..21)  rater / trait scores   → always 0.0 at inference,
//                                      they only exist in the
//                                      training data
//   21       word_count
//   22       char_count
//   23       flesch_reading_ease
//   24       gunning_fog
//   25       smog_index
//   26       automated_readability_index

use serde::{Deserialize, Serialize};

pub const FEATURE_COUNT: usize = 27;

/// Leading columns that are zero-filled at inference time
pub const PLACEHOLDER_COUNT: usize = 21;

pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    "rater3_domain1", "rater1_domain2", "rater2_domain2",
    "rater1_trait1", "rater1_trait2", "rater1_trait3", "rater1_trait4",
    "rater1_trait5", "rater1_trait6", "rater2_trait1", "rater2_trait2",
    "rater2_trait3", "rater2_trait4", "rater2_trait5", "rater2_trait6",
    "rater3_trait1", "rater3_trait2", "rater3_trait3", "rater3_trait4",
    "rater3_trait5", "rater3_trait6",
    "word_count", "char_count",
    "flesch_reading_ease", "gunning_fog", "smog_index",
    "automated_readability_index",
];

/// Fixed-size feature row. The array type makes a wrong
/// length impossible to construct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Placeholders zeroed, computed columns filled in order
    pub fn from_computed(computed: [f64; FEATURE_COUNT - PLACEHOLDER_COUNT]) -> Self {
        let mut values = [0.0; FEATURE_COUNT];
        values[PLACEHOLDER_COUNT..].copy_from_slice(&computed);
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Values as f32, the model's tensor element type
    pub fn to_f32_vec(&self) -> Vec<f32> {
        self.values().iter().map(|&v| v as f32).collect()
    }
}

#[cfg(test)]
impl FeatureVector {
    /// Look a value up by its column name
    pub fn get(&self, column: &str) -> Option<f64> {
        FEATURE_COLUMNS
            .iter()
            .position(|c| *c == column)
            .map(|i| self.values[i])
    }
}
