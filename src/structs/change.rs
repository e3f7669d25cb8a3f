use serde::{Deserialize, Serialize};
use crate::enums::change_status::ChangeStatus;
use crate::enums::change_type::ChangeType;
use crate::enums::decision::Decision;
use crate::enums::line_diff::LineDiff;
use crate::errors::ReviewResult;
use crate::config::constants::CHANGE_ID_PREFIX;
use crate::structs::line_position::LinePosition;

/// One classified difference between corresponding lines of two documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub id: String,
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    pub old_text: String,
    pub text: String,
    pub line_number: usize,
    pub line_diffs: Vec<LineDiff>,
    pub status: ChangeStatus,
    pub position: LinePosition,
}

impl Change {
    pub fn addition(sequence: usize, index: usize, new_line: &str) -> Self {
        Self::build(sequence, index, ChangeType::Addition, "", new_line, vec![LineDiff::inserted(new_line)])
    }

    pub fn deletion(sequence: usize, index: usize, old_line: &str) -> Self {
        Self::build(sequence, index, ChangeType::Deletion, old_line, "", vec![LineDiff::removed(old_line)])
    }

    pub fn modification(sequence: usize, index: usize, old_line: &str, new_line: &str, line_diffs: Vec<LineDiff>) -> Self {
        Self::build(sequence, index, ChangeType::Modification, old_line, new_line, line_diffs)
    }

    fn build(sequence: usize, index: usize, change_type: ChangeType, old_text: &str, text: &str, line_diffs: Vec<LineDiff>) -> Self {
        Self {
            id: format!("{}{}", CHANGE_ID_PREFIX, sequence),
            change_type,
            old_text: old_text.to_string(),
            text: text.to_string(),
            line_number: index + 1,
            line_diffs,
            status: ChangeStatus::Pending,
            position: LinePosition::for_index(index),
        }
    }

    pub fn line_index(&self) -> usize {
        self.line_number.saturating_sub(1)
    }

    pub fn is_pending(&self) -> bool {
        self.status == ChangeStatus::Pending
    }

    pub fn is_approved(&self) -> bool {
        self.status == ChangeStatus::Approved
    }

    /// Records a reviewer decision. Fails without touching `status` when the
    /// change was already decided.
    pub fn decide(&mut self, decision: Decision) -> ReviewResult<ChangeStatus> {
        self.status = self.status.transition(&self.id, decision)?;
        Ok(self.status)
    }

    /// Inline rendering of the change, e.g. `Net [-30-]{+45+} days`.
    pub fn render_inline(&self) -> String {
        self.line_diffs.iter().map(LineDiff::describe).collect()
    }
}
