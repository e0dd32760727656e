// ============================================================
// Layer 5 — Inferencer
// ============================================================
// Wraps the loaded LstmRegressor behind the ScoringModel trait.
// One essay per call: both inputs become batch-of-one tensors on
// the CPU backend, and the single output value is returned.
//
// Shape problems (wrong feature count, ids outside the embedding
// table) are reported as errors before touching the model.

use anyhow::{bail, Result};
use burn::prelude::*;
use burn::tensor::TensorData;

use crate::domain::features::FeatureVector;
use crate::domain::sequence::TokenSequence;
use crate::domain::traits::ScoringModel;
use crate::infra::checkpoint::ArtifactStore;
use crate::ml::model::{LstmRegressor, LstmRegressorConfig};

pub type InferBackend = burn::backend::NdArray;

pub struct LstmScorer {
    model:  LstmRegressor<InferBackend>,
    config: LstmRegressorConfig,
    device: burn::backend::ndarray::NdArrayDevice,
}

impl LstmScorer {
    /// Rebuild the architecture from the stored config, then load weights.
    pub fn from_artifacts(store: &ArtifactStore) -> Result<Self> {
        let device = burn::backend::ndarray::NdArrayDevice::default();
        let config = store.load_model_config()?;
        let model  = config.init::<InferBackend>(&device);
        let model  = store.load_model(model, &device)?;
        tracing::info!(
            "Model loaded (vocab={}, embed={}, hidden={}, features={})",
            config.vocab_size, config.embed_dim, config.hidden_size, config.num_features
        );
        Ok(Self::new(model, config, device))
    }

    pub fn new(
        model:  LstmRegressor<InferBackend>,
        config: LstmRegressorConfig,
        device: burn::backend::ndarray::NdArrayDevice,
    ) -> Self {
        Self { model, config, device }
    }

    pub fn config(&self) -> &LstmRegressorConfig {
        &self.config
    }
}

impl ScoringModel for LstmScorer {
    fn predict(&self, tokens: &TokenSequence, features: &FeatureVector) -> Result<f64> {
        if features.len() != self.config.num_features {
            bail!(
                "feature vector has {} values, model expects {}",
                features.len(),
                self.config.num_features
            );
        }
        if let Some(bad) = tokens.ids().iter().find(|&&id| id as usize >= self.config.vocab_size) {
            bail!("token id {} is outside the vocabulary ({})", bad, self.config.vocab_size);
        }
        if tokens.is_empty() {
            bail!("token sequence is empty");
        }

        let ids: Vec<i64> = tokens.ids().iter().map(|&id| id as i64).collect();
        let text_tensor = Tensor::<InferBackend, 2, Int>::from_data(
            TensorData::new(ids, [1, tokens.len()]),
            &self.device,
        );
        let feat_tensor = Tensor::<InferBackend, 2>::from_data(
            TensorData::new(features.to_f32_vec(), [1, features.len()]),
            &self.device,
        );

        let output = self.model.forward(text_tensor, feat_tensor);
        let values = output
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow::anyhow!("Cannot read model output: {e:?}"))?;

        let prediction = match values.first() {
            Some(v) => f64::from(*v),
            None    => bail!("model returned no output"),
        };
        if !prediction.is_finite() {
            bail!("model returned a non-finite score ({prediction})");
        }

        tracing::debug!("Raw model prediction: {:.4}", prediction);
        Ok(prediction)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::features::FeatureExtractor;
    use crate::domain::sequence::MAX_LEN;

    fn scorer() -> LstmScorer {
        let device = burn::backend::ndarray::NdArrayDevice::default();
        let config = LstmRegressorConfig::new()
            .with_vocab_size(40)
            .with_embed_dim(6)
            .with_hidden_size(4);
        let model = config.init::<InferBackend>(&device);
        LstmScorer::new(model, config, device)
    }

    #[test]
    fn test_predict_returns_finite_value() {
        let s        = scorer();
        let tokens   = TokenSequence::from_ids(vec![3, 7, 11, 2], MAX_LEN);
        let features = FeatureExtractor::new().extract("a short normalised essay");
        let value    = s.predict(&tokens, &features).unwrap();
        assert!(value.is_finite());
    }

    #[test]
    fn test_predict_is_deterministic() {
        let s        = scorer();
        let tokens   = TokenSequence::from_ids(vec![1, 2, 3], 20);
        let features = FeatureExtractor::new().extract("one two three");
        let a = s.predict(&tokens, &features).unwrap();
        let b = s.predict(&tokens, &features).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_vocabulary_id_is_rejected() {
        let s        = scorer();
        let tokens   = TokenSequence::from_ids(vec![1, 40], 10);
        let features = FeatureExtractor::new().extract("x");
        let err = s.predict(&tokens, &features).unwrap_err();
        assert!(err.to_string().contains("outside the vocabulary"));
    }

    #[test]
    fn test_feature_width_mismatch_is_rejected() {
        let device = burn::backend::ndarray::NdArrayDevice::default();
        let config = LstmRegressorConfig::new()
            .with_vocab_size(40)
            .with_embed_dim(6)
            .with_hidden_size(4)
            .with_num_features(12);
        let s = LstmScorer::new(config.init::<InferBackend>(&device), config, device);

        let tokens   = TokenSequence::from_ids(vec![1], 10);
        let features = FeatureExtractor::new().extract("x");
        let err = s.predict(&tokens, &features).unwrap_err();
        assert!(err.to_string().contains("model expects 12"));
    }
}
