// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns and the concrete collaborators the
// application layer is wired with at startup:
//
//   config.rs          — ScoringConfig (JSON file + defaults)
//
//   checkpoint.rs      — ArtifactStore: model_config.json and
//                        CompactRecorder weights
//
//   tokenizer_store.rs — loads tokenizer.json and adapts it to
//                        the Sequencer trait
//
//   language_tool.rs   — GrammarChecker over the LanguageTool
//                        HTTP API
//
// Everything here is loaded once and then only read.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Process-wide scoring configuration
pub mod config;

/// Pretrained model artifacts
pub mod checkpoint;

/// Tokenizer loading and the word-level Sequencer
pub mod tokenizer_store;

/// LanguageTool grammar checker client
pub mod language_tool;
