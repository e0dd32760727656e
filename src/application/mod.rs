// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to score an essay.
//
// Rules for this layer:
//   - No model math or tensor code here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern

// The essay scoring workflow
pub mod score_use_case;
