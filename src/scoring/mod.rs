// ============================================================
// Layer 3b — Scoring Rules
// ============================================================
// The deterministic heart of the scorer. Pure functions only:
// no model, no HTTP, no files.
//
//   reconciler.rs — grammar matches → RED/GREEN span partition
//   composer.rs   — model output + signals → final 0–10 score
//   feedback.rs   — checker messages + signals → feedback lines
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

/// Grammar match offsets → complete highlight partition
pub mod reconciler;

/// Heuristic blend and boost rules for the final score
pub mod composer;

/// Ordered, de-duplicated feedback lines
pub mod feedback;

/// Round to `places` decimals, ties to even on the exact binary
/// value (so 0.15, stored as 0.1499…, rounds to 0.1).
///
/// Float formatting already rounds the exact value correctly,
/// so the decimal string is parsed back.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.places$}").parse().unwrap_or(value)
}
