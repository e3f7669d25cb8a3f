use serde::Serialize;
use crate::enums::change_status::ChangeStatus;
use crate::enums::decision::Decision;
use crate::enums::review_stage::ReviewStage;
use crate::errors::{ReviewError, ReviewResult};
use crate::services::diff_engine::DiffEngine;
use crate::services::merge_applier::MergeApplier;
use crate::services::review_ledger::ReviewLedger;
use crate::structs::change::Change;
use crate::structs::merge_outcome::MergeOutcome;
use crate::structs::review_summary::ReviewSummary;
use crate::traits::document_source::DocumentSource;

/// One review from first draft to merged document.
///
/// Steps must run in order: `Draft -> Editing -> Reviewing -> Complete`.
/// A reviewer may step back from `Reviewing` to `Editing`, which throws the
/// current change set away. `Complete` is final.
#[derive(Clone, Serialize)]
pub struct ContractReview {
    stage: ReviewStage,
    original_text: String,
    modified_text: String,
    ledger: ReviewLedger,
    outcome: Option<MergeOutcome>,
    #[serde(skip)]
    engine: DiffEngine,
    #[serde(skip)]
    applier: MergeApplier,
}

impl ContractReview {
    pub fn new(engine: DiffEngine, applier: MergeApplier) -> Self {
        Self {
            stage: ReviewStage::Draft,
            original_text: String::new(),
            modified_text: String::new(),
            ledger: ReviewLedger::default(),
            outcome: None,
            engine,
            applier,
        }
    }

    pub fn stage(&self) -> ReviewStage {
        self.stage
    }

    pub fn changes(&self) -> &[Change] {
        self.ledger.changes()
    }

    pub fn summary(&self) -> ReviewSummary {
        self.ledger.summary()
    }

    pub fn outcome(&self) -> Option<&MergeOutcome> {
        self.outcome.as_ref()
    }

    /// Captures the original document.
    pub fn save_initial(&mut self, source: &dyn DocumentSource) -> ReviewResult<()> {
        self.expect_stage("save the original", ReviewStage::Draft)?;
        self.original_text = source.get_content()?;
        self.stage = ReviewStage::Editing;
        log::info!("📄 Saved original from {} ({} bytes)", source.name(), self.original_text.len());
        Ok(())
    }

    /// Seeds the editing surface with the original text.
    pub fn prepare_editor(&self, editor: &mut dyn DocumentSource) -> ReviewResult<()> {
        self.expect_stage("prepare the editor", ReviewStage::Editing)?;
        if !self.original_text.is_empty() {
            editor.set_content(&self.original_text)?;
        }
        Ok(())
    }

    /// Captures the edited document and computes the change set.
    pub fn save_edits(&mut self, source: &dyn DocumentSource) -> ReviewResult<&[Change]> {
        self.expect_stage("save edits", ReviewStage::Editing)?;
        let modified = source.get_content()?;
        Ok(self.begin_review(modified))
    }

    /// Shortcut for callers that already hold both texts.
    pub fn start(&mut self, original: &str, modified: &str) -> ReviewResult<&[Change]> {
        self.expect_stage("start a review", ReviewStage::Draft)?;
        self.original_text = original.to_string();
        Ok(self.begin_review(modified.to_string()))
    }

    fn begin_review(&mut self, modified: String) -> &[Change] {
        self.modified_text = modified;
        self.ledger = ReviewLedger::new(self.engine.compute_changes(&self.original_text, &self.modified_text));
        self.stage = ReviewStage::Reviewing;
        log::info!("🔍 {} changes ready for review", self.ledger.changes().len());
        self.ledger.changes()
    }

    pub fn decide(&mut self, change_id: &str, decision: Decision) -> ReviewResult<ChangeStatus> {
        self.expect_stage("decide on a change", ReviewStage::Reviewing)?;
        self.ledger.decide(change_id, decision)
    }

    pub fn decide_all_pending(&mut self, decision: Decision) -> ReviewResult<usize> {
        self.expect_stage("decide on changes", ReviewStage::Reviewing)?;
        Ok(self.ledger.decide_all_pending(decision))
    }

    pub fn return_to_editing(&mut self) -> ReviewResult<()> {
        self.expect_stage("return to editing", ReviewStage::Reviewing)?;
        self.ledger = ReviewLedger::default();
        self.modified_text.clear();
        self.stage = ReviewStage::Editing;
        Ok(())
    }

    /// Runs the pending-change gate and merges the approved changes. On a
    /// validation failure the review stays open.
    pub fn complete_review(&mut self) -> ReviewResult<&MergeOutcome> {
        self.expect_stage("complete the review", ReviewStage::Reviewing)?;
        let approved = self.ledger.finalize()?;
        let outcome = self.applier.apply_changes(&self.original_text, &approved)?;
        self.stage = ReviewStage::Complete;
        Ok(self.outcome.insert(outcome))
    }

    /// Writes the merged document to `sink`.
    pub fn publish(&self, sink: &mut dyn DocumentSource) -> ReviewResult<()> {
        self.expect_stage("publish", ReviewStage::Complete)?;
        let outcome = self.outcome
            .as_ref()
            .ok_or_else(|| ReviewError::system_error("publish", "completed review has no merge outcome"))?;
        sink.set_content(&outcome.text)?;
        log::info!("✅ Final document written to {}", sink.name());
        Ok(())
    }

    fn expect_stage(&self, operation: &str, expected: ReviewStage) -> ReviewResult<()> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(ReviewError::stage_error(operation, expected, self.stage))
        }
    }
}

impl Default for ContractReview {
    fn default() -> Self {
        Self::new(DiffEngine::default(), MergeApplier::default())
    }
}
