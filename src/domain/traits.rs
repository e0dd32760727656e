// ============================================================
// Layer 3 — Core Traits (Collaborator Abstractions)
// ============================================================
// The scoring pipeline talks to three opaque collaborators.
// Programming against these traits keeps the application layer
// free of burn, tokenizers and HTTP types, and lets tests swap
// in fixed fakes.
//
//   GrammarChecker → LanguageToolClient (infra)
//   Sequencer      → WordLevelSequencer (infra)
//   ScoringModel   → LstmScorer         (ml)
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::essay::Essay;
use crate::domain::features::FeatureVector;
use crate::domain::grammar::GrammarMatch;
use crate::domain::sequence::TokenSequence;

// ─── EssaySource ──────────────────────────────────────────────────────────────
/// Anything that can produce an essay to score.
pub trait EssaySource {
    fn load(&self) -> Result<Essay>;
}

// ─── GrammarChecker ───────────────────────────────────────────────────────────
/// External grammar checking service.
///
/// Calls are synchronous and blocking. Offsets in the returned
/// matches are char offsets into `text`.
pub trait GrammarChecker {
    fn check(&self, text: &str) -> Result<Vec<GrammarMatch>>;
}

// ─── Sequencer ────────────────────────────────────────────────────────────────
/// Pretrained tokenizer: normalised text → vocabulary ids.
/// Padding to a fixed length is NOT its job; see TokenSequence.
pub trait Sequencer {
    fn encode(&self, text: &str) -> Result<Vec<u32>>;
}

// ─── ScoringModel ─────────────────────────────────────────────────────────────
/// Pretrained regression model. Multiplying the output by 10
/// gives a rough essay score; callers clamp it.
pub trait ScoringModel {
    fn predict(&self, tokens: &TokenSequence, features: &FeatureVector) -> Result<f64>;
}
