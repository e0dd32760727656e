// ============================================================
// Layer 2 — Score Use Case
// ============================================================
// Runs one essay through the whole pipeline:
//
//   Step 1: Normalise the text                 (Layer 4 - data)
//   Step 2: Validate, reject before any work   (Layer 4 - data)
//   Step 3: Grammar check the ORIGINAL text    (collaborator)
//   Step 4: Reconcile matches into spans       (Layer 3b - scoring)
//   Step 5: Distinct grammar messages          (Layer 3b - scoring)
//   Step 6: Features + token sequence          (Layer 4 - data)
//   Step 7: Model prediction                   (collaborator)
//   Step 8: Compose score and feedback         (Layer 3b - scoring)
//
// The collaborators and the configuration are injected once and
// only read afterwards, so one ScoreUseCase serves any number of
// essays.

use anyhow::Result;

use crate::data::{
    features::FeatureExtractor,
    preprocessor::TextNormalizer,
    validator::EssayValidator,
    vocabulary::GoodWords,
};
use crate::domain::{
    error::ScoringError,
    report::ScoreResult,
    sequence::TokenSequence,
    traits::{GrammarChecker, ScoringModel, Sequencer},
};
use crate::infra::{
    checkpoint::ArtifactStore,
    config::ScoringConfig,
    language_tool::LanguageToolClient,
    tokenizer_store::{TokenizerStore, WordLevelSequencer},
};
use crate::ml::inferencer::LstmScorer;
use crate::scoring::{
    composer::{ScoreComposer, ScoreSignals},
    feedback::FeedbackComposer,
    reconciler::SpanReconciler,
};

pub struct ScoreUseCase {
    config:     ScoringConfig,
    good_words: GoodWords,
    sequencer:  Box<dyn Sequencer>,
    model:      Box<dyn ScoringModel>,
    checker:    Box<dyn GrammarChecker>,
}

impl ScoreUseCase {
    pub fn new(
        config:    ScoringConfig,
        sequencer: Box<dyn Sequencer>,
        model:     Box<dyn ScoringModel>,
        checker:   Box<dyn GrammarChecker>,
    ) -> Self {
        let good_words = config.good_words();
        tracing::debug!("{} good words configured", good_words.len());
        Self { config, good_words, sequencer, model, checker }
    }

    /// Wire the real collaborators: tokenizer + LSTM weights from
    /// `artifacts_dir` and a LanguageTool client. Any missing
    /// artifact is a startup error.
    pub fn from_artifacts(config: ScoringConfig, artifacts_dir: &str) -> Result<Self> {
        let store     = ArtifactStore::new(artifacts_dir);
        let tokenizer = TokenizerStore::new(store.tokenizer_path()).load()?;
        let model     = LstmScorer::from_artifacts(&store)?;

        // The embedding table bounds the usable ids.
        let vocab_size = model.config().vocab_size.min(config.vocab_size);
        let sequencer  = WordLevelSequencer::new(tokenizer, vocab_size);
        let checker    = LanguageToolClient::new(
            &config.language_tool_url,
            config.language.clone(),
            config.timeout(),
        )?;

        tracing::info!("Grammar checker: {}", config.language_tool_url);
        Ok(Self::new(config, Box::new(sequencer), Box::new(model), Box::new(checker)))
    }

    pub fn score(&self, essay: &str) -> Result<ScoreResult, ScoringError> {
        // ── Steps 1–2: normalise and validate ────────────────────────────────
        let normalized = TextNormalizer::new().normalize(essay);
        EssayValidator::new(self.config.min_words).validate(essay, &normalized)?;

        // ── Steps 3–5: grammar ───────────────────────────────────────────────
        let matches = self.checker.check(essay).map_err(ScoringError::external)?;
        let text_len = essay.chars().count();
        let spans    = SpanReconciler::new().reconcile(text_len, &matches);

        let feedback_composer = FeedbackComposer::new();
        let grammar_messages  = feedback_composer.grammar_messages(essay, &matches);

        // ── Steps 6–7: model ─────────────────────────────────────────────────
        let features = FeatureExtractor::new().extract(&normalized);
        let ids      = self.sequencer.encode(&normalized).map_err(ScoringError::inference)?;
        let tokens   = TokenSequence::from_ids(ids, self.config.max_len);
        tracing::debug!("Token sequence: {} of {} positions used", tokens.content_len(), tokens.len());
        let raw      = self.model.predict(&tokens, &features).map_err(ScoringError::inference)?;
        if !raw.is_finite() {
            return Err(ScoringError::ModelInference(format!("non-finite prediction {raw}")));
        }

        // ── Step 8: compose ──────────────────────────────────────────────────
        let signals = ScoreSignals {
            raw_model_score:     raw,
            grammar_error_count: grammar_messages.len(),
            word_count:          TextNormalizer::word_count(&normalized),
            good_word_count:     self.good_words.count_in(&normalized),
        };
        let breakdown = ScoreComposer::new().compose(&signals);
        let feedback  = feedback_composer.compose(grammar_messages, &signals);

        let result = ScoreResult {
            final_score: breakdown.final_score,
            feedback,
            spans,
        };

        tracing::info!(
            "Scored essay: {} (words={}, grammar issues={}, flagged spans={}, good words={}, boost={:?})",
            result.score_label(),
            signals.word_count,
            signals.grammar_error_count,
            result.red_span_count(),
            signals.good_word_count,
            breakdown.boost
        );

        Ok(result)
    }
}
