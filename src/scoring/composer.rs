// ============================================================
// Layer 3b — Score Composer
// ============================================================
// Blends the model's prediction with grammar and vocabulary
// heuristics into the final 0–10 score.
//
//   model      = raw × 10
//   heuristic  = max(0, 10 − 0.4 × errors)
//   ratio      = heuristic / 10
//   adjustment = +0.4 if errors == 0, −0.2 if errors > 5, else 0
//   blended    = 0.75 × model + 0.25 × heuristic + adjustment
//
// Boosts, first match wins (all need ≥ 200 words):
//   errors == 0  and ≥ 3 good words  → exactly 10
//   ratio ≥ 0.9  and ≥ 2 good words  → exactly 9
//   ratio ≥ 0.9  and ≥ 1 good word   → at least 8.5
//
// Finally: round to one decimal FIRST; a rounded value of 9.9 or
// more becomes 10.0, anything else is clamped to [0, 10].

use serde::{Deserialize, Serialize};

use crate::scoring::round_to;

pub const LONG_ESSAY_WORDS: usize = 200;
pub const ERROR_PENALTY:    f64   = 0.4;
pub const MODEL_WEIGHT:     f64   = 0.75;
pub const HEURISTIC_WEIGHT: f64   = 0.25;
pub const CLEAN_BONUS:      f64   = 0.4;
pub const ERROR_HEAVY:      usize = 5;
pub const HEAVY_PENALTY:    f64   = 0.2;
pub const BOOST_RATIO:      f64   = 0.9;
pub const BOOST_FLOOR:      f64   = 8.5;
pub const FORCE_TEN_AT:     f64   = 9.90;

/// Everything the composers need to know about one essay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSignals {
    /// Model output before the ×10 scaling
    pub raw_model_score:     f64,
    pub grammar_error_count: usize,
    pub word_count:          usize,
    pub good_word_count:     usize,
}

/// Which boost rule fired, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boost {
    /// Long, flawless, rich vocabulary → 10
    Perfect,
    /// Long, near-flawless, good vocabulary → 9
    Strong,
    /// Long, near-flawless, some vocabulary → floor of 8.5
    Floor,
    None,
}

/// Every intermediate value, kept for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub model_score:     f64,
    pub heuristic_score: f64,
    pub grammar_ratio:   f64,
    pub adjustment:      f64,
    pub blended:         f64,
    pub boost:           Boost,
    pub final_score:     f64,
}

pub struct ScoreComposer;

impl ScoreComposer {
    pub fn new() -> Self {
        Self
    }

    pub fn compose(&self, signals: &ScoreSignals) -> ScoreBreakdown {
        let errors = signals.grammar_error_count;

        let model_score     = signals.raw_model_score * 10.0;
        let heuristic_score = Self::heuristic_score(errors);
        let grammar_ratio   = heuristic_score / 10.0;
        let adjustment      = Self::adjustment(errors);
        let blended = MODEL_WEIGHT * model_score + HEURISTIC_WEIGHT * heuristic_score + adjustment;

        let (boost, boosted) = Self::apply_boost(signals, grammar_ratio, blended);
        let final_score      = Self::finalize(boosted);

        tracing::debug!(
            "Score: model={:.3} heuristic={:.2} adj={:+.1} blended={:.3} boost={:?} final={:.1}",
            model_score, heuristic_score, adjustment, blended, boost, final_score
        );

        ScoreBreakdown {
            model_score,
            heuristic_score,
            grammar_ratio,
            adjustment,
            blended,
            boost,
            final_score,
        }
    }

    /// Grammar-only score: 10 minus 0.4 per error, never negative
    pub fn heuristic_score(errors: usize) -> f64 {
        (10.0 - errors as f64 * ERROR_PENALTY).max(0.0)
    }

    fn adjustment(errors: usize) -> f64 {
        if errors == 0 {
            CLEAN_BONUS
        } else if errors > ERROR_HEAVY {
            -HEAVY_PENALTY
        } else {
            0.0
        }
    }

    fn apply_boost(signals: &ScoreSignals, ratio: f64, blended: f64) -> (Boost, f64) {
        let long = signals.word_count >= LONG_ESSAY_WORDS;
        let good = signals.good_word_count;

        if long && signals.grammar_error_count == 0 && good >= 3 {
            (Boost::Perfect, 10.0)
        } else if long && ratio >= BOOST_RATIO && good >= 2 {
            (Boost::Strong, 9.0)
        } else if long && ratio >= BOOST_RATIO && good >= 1 {
            (Boost::Floor, blended.max(BOOST_FLOOR))
        } else {
            (Boost::None, blended)
        }
    }

    /// Round to one decimal, then force near-perfect scores to
    /// 10.0 and clamp the rest. The order matters: the 9.9 test
    /// looks at the ROUNDED value.
    pub fn finalize(score: f64) -> f64 {
        let rounded = round_to(score, 1);
        if rounded >= FORCE_TEN_AT {
            10.0
        } else {
            let clamped = rounded.clamp(0.0, 10.0);
            // -0.0 would print as "-0.0/10"
            if clamped == 0.0 { 0.0 } else { clamped }
        }
    }
}

impl Default for ScoreComposer {
    fn default() -> Self {
        Self::new()
    }
}
