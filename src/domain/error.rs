// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Two families of failure reach the caller:
//
//   ValidationError — the essay was rejected before any scoring
//                     work happened (empty, no letters, too short)
//   ScoringError    — everything the pipeline itself can hit:
//                     a rejected essay, a failing grammar checker,
//                     or a broken model invocation
//
// Nothing in here is retried automatically.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("essay is empty")]
    Empty,

    #[error("essay does not contain any alphabetic characters")]
    NonAlphabetic,

    #[error("essay has {words} words; at least {min} are required")]
    TooShort { words: usize, min: usize },
}

impl ValidationError {
    /// Short machine-readable code for structured rejections
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::Empty           => "empty",
            ValidationError::NonAlphabetic   => "invalid",
            ValidationError::TooShort { .. } => "short",
        }
    }
}

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The grammar checker could not be reached or answered garbage.
    /// The request fails as a whole; a zero-error result is never
    /// substituted.
    #[error("grammar checker failed: {0}")]
    ExternalService(String),

    /// Feature/token shape mismatch or a non-finite prediction.
    #[error("model inference failed: {0}")]
    ModelInference(String),
}

impl ScoringError {
    pub fn external(err: anyhow::Error) -> Self {
        ScoringError::ExternalService(format!("{err:#}"))
    }

    pub fn inference(err: anyhow::Error) -> Self {
        ScoringError::ModelInference(format!("{err:#}"))
    }
}
