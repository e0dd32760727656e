// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything that turns a raw essay into model-ready input.
//
//   .txt / .docx file
//       │
//       ▼
//   EssayFile          → reads the file, extracts raw text
//       │
//       ▼
//   TextNormalizer     → lowercase, strip symbols, collapse spaces
//       │
//       ▼
//   EssayValidator     → rejects empty / non-alphabetic / short
//       │
//       ├──────────────────────────┐
//       ▼                          ▼
//   FeatureExtractor           Tokenizer (infra) → TokenSequence
//   (counts + readability)     (domain; pad / truncate to MAX_LEN)
//       │                          │
//       └────────────┬─────────────┘
//                    ▼
//              ScoringModel (ml)
//
// Each module is responsible for exactly one step.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads .txt and .docx essays
pub mod loader;

/// Lowercases and strips raw text for tokenisation
pub mod preprocessor;

/// Pre-scoring rejection rules
pub mod validator;

/// textstat-style readability indices
pub mod readability;

/// Fills the 27-column numeric feature row
pub mod features;

/// The curated list of advanced words
pub mod vocabulary;
