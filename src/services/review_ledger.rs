use serde::{Deserialize, Serialize};
use crate::enums::change_status::ChangeStatus;
use crate::enums::decision::Decision;
use crate::errors::{ReviewError, ReviewResult};
use crate::structs::change::Change;
use crate::structs::review_summary::ReviewSummary;

/// Owns one batch of changes while they are being reviewed.
///
/// Only the `status` field of a change is ever mutated here, and only through
/// the pending -> approved | rejected transition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewLedger {
    changes: Vec<Change>,
}

impl ReviewLedger {
    pub fn new(changes: Vec<Change>) -> Self {
        Self { changes }
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn get(&self, change_id: &str) -> Option<&Change> {
        self.changes.iter().find(|change| change.id == change_id)
    }

    pub fn decide(&mut self, change_id: &str, decision: Decision) -> ReviewResult<ChangeStatus> {
        let change = self.changes
            .iter_mut()
            .find(|change| change.id == change_id)
            .ok_or_else(|| ReviewError::ChangeNotFound { change_id: change_id.to_string() })?;

        let status = change.decide(decision)?;
        log::debug!("🗳️ {} (line {}) -> {}", change.id, change.line_number, status);
        Ok(status)
    }

    pub fn approve(&mut self, change_id: &str) -> ReviewResult<ChangeStatus> {
        self.decide(change_id, Decision::Approve)
    }

    pub fn reject(&mut self, change_id: &str) -> ReviewResult<ChangeStatus> {
        self.decide(change_id, Decision::Reject)
    }

    /// Applies `decision` to every change still pending; returns how many moved.
    pub fn decide_all_pending(&mut self, decision: Decision) -> usize {
        let mut decided = 0;
        for change in self.changes.iter_mut().filter(|change| change.is_pending()) {
            if change.decide(decision).is_ok() {
                decided += 1;
            }
        }
        decided
    }

    pub fn approve_all_pending(&mut self) -> usize {
        self.decide_all_pending(Decision::Approve)
    }

    pub fn reject_all_pending(&mut self) -> usize {
        self.decide_all_pending(Decision::Reject)
    }

    pub fn pending_ids(&self) -> Vec<String> {
        self.changes
            .iter()
            .filter(|change| change.is_pending())
            .map(|change| change.id.clone())
            .collect()
    }

    pub fn summary(&self) -> ReviewSummary {
        ReviewSummary::from_changes(&self.changes)
    }

    /// Gate for completing a review: fails while anything is pending,
    /// otherwise returns the approved changes in source order.
    pub fn finalize(&self) -> ReviewResult<Vec<Change>> {
        let pending = self.pending_ids();
        if !pending.is_empty() {
            return Err(ReviewError::pending_changes(pending));
        }

        Ok(self.changes
            .iter()
            .filter(|change| change.is_approved())
            .cloned()
            .collect())
    }
}
