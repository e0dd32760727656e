// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums and traits that define what the
// essay scorer works with:
//
//   Essay        — raw essay text plus where it came from
//   GrammarMatch — one finding from the grammar checker
//   Span         — a RED (flagged) or GREEN (clean) text range
//   ScoreResult  — final score, feedback and highlight spans
//   FeatureVector / TokenSequence — the two model inputs
//
// Rules for this layer:
//   - NO burn, tokenizers or HTTP types here
//   - NO file I/O
//   - Only plain data and the traits other layers implement
//
// Offsets everywhere in this layer are char (Unicode scalar)
// indices into the ORIGINAL essay text, never byte indices.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

/// An essay loaded from disk or passed on the command line
pub mod essay;

/// Grammar checker findings
pub mod grammar;

/// Highlight spans over the essay text
pub mod span;

/// The model's numeric feature row
pub mod features;

/// Fixed-length token id sequences
pub mod sequence;

/// The structured scoring output
pub mod report;

/// Validation and scoring error taxonomy
pub mod error;

/// Collaborator abstractions (checker, sequencer, model)
pub mod traits;
