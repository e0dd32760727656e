// ============================================================
// Layer 6 — Artifact Store
// ============================================================
// Loads the pretrained scoring artifacts from one directory:
//
//   artifacts/
//     model_config.json   ← LstmRegressorConfig (architecture)
//     model.mpk           ← weights, burn CompactRecorder format
//     tokenizer.json      ← word-level tokenizer (see tokenizer_store)
//
// Why keep the config separately?
//   The weights can only be loaded into a model of the exact
//   same shape, so the architecture has to be rebuilt first.
//
// Missing files or a shape mismatch are FATAL at startup; the
// scorer never runs without its model.
//
// Reference: Burn Book §5 (Records and Checkpointing)
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
};

use crate::ml::model::{LstmRegressor, LstmRegressorConfig};

pub const MODEL_CONFIG_FILE: &str = "model_config.json";
pub const MODEL_WEIGHTS:     &str = "model";
pub const TOKENIZER_FILE:    &str = "tokenizer.json";

pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn tokenizer_path(&self) -> PathBuf {
        self.dir.join(TOKENIZER_FILE)
    }

    /// Read the model architecture from model_config.json
    pub fn load_model_config(&self) -> Result<LstmRegressorConfig> {
        let path = self.dir.join(MODEL_CONFIG_FILE);

        let json = fs::read_to_string(&path)
            .with_context(|| {
                format!(
                    "Cannot read model config from '{}'. \
                     Is --artifacts-dir pointing at the pretrained model?",
                    path.display()
                )
            })?;

        serde_json::from_str(&json)
            .with_context(|| format!("Malformed model config '{}'", path.display()))
    }

    /// Load the pretrained weights into a freshly built model.
    /// The model must have the architecture from load_model_config.
    pub fn load_model<B: Backend>(
        &self,
        model:  LstmRegressor<B>,
        device: &B::Device,
    ) -> Result<LstmRegressor<B>> {
        let path = self.dir.join(MODEL_WEIGHTS);

        tracing::info!("Loading model weights from '{}'", self.dir.display());

        let record = CompactRecorder::new()
            .load(path.clone(), device)
            .with_context(|| {
                format!("Cannot load model weights '{}'", path.display())
            })?;

        Ok(model.load_record(record))
    }
}

/// Writers for building artifact directories in tests; the
/// scorer itself only ever reads them.
#[cfg(test)]
impl ArtifactStore {
    /// Write the architecture next to the weights.
    pub fn save_model_config(&self, cfg: &LstmRegressorConfig) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;
        let path = self.dir.join(MODEL_CONFIG_FILE);
        fs::write(&path, serde_json::to_string_pretty(cfg)?)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;
        Ok(())
    }

    /// Store model weights with CompactRecorder
    /// (MessagePack, half precision; the recorder adds the extension).
    pub fn save_model<B: Backend>(&self, model: &LstmRegressor<B>) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;
        let path = self.dir.join(MODEL_WEIGHTS);

        CompactRecorder::new()
            .record(model.clone().into_record(), path.clone())
            .with_context(|| format!("Failed to save weights to '{}'", path.display()))?;

        tracing::debug!("Saved model weights to '{}'", path.display());
        Ok(())
    }
}
