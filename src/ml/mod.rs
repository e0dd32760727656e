// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All burn-specific code lives here. Nothing outside this layer
// (apart from the checkpoint loader in infra) touches tensors.
//
//   model.rs      — LSTM regressor architecture
//   inferencer.rs — ScoringModel implementation: builds tensors
//                   from a TokenSequence + FeatureVector and
//                   returns the scalar prediction
//
// Training is out of scope: the weights come from a pretrained
// record on disk.
//
// Reference: Burn Book §3 (Building Blocks)

/// LSTM regressor architecture
pub mod model;

/// Inference wrapper implementing ScoringModel
pub mod inferencer;
