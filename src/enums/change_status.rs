use std::fmt;
use serde::{Deserialize, Serialize};
use crate::enums::decision::Decision;
use crate::errors::{ReviewError, ReviewResult};

/// Review state of a single change.
///
/// `Pending` is the only non-terminal state: a change moves to `Approved` or
/// `Rejected` exactly once and never returns to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ChangeStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ChangeStatus::Pending)
    }

    /// Returns the state reached by applying `decision`, or a
    /// `StatusTransition` error when this state is already terminal.
    pub fn transition(self, change_id: &str, decision: Decision) -> ReviewResult<ChangeStatus> {
        let next = decision.target_status();
        if !self.is_terminal() {
            return Ok(next);
        }
        Err(ReviewError::StatusTransition {
            change_id: change_id.to_string(),
            from: self,
            to: next,
        })
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ChangeStatus::Pending => "⚪",
            ChangeStatus::Approved => "✓",
            ChangeStatus::Rejected => "✗",
        }
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChangeStatus::Pending => "pending",
            ChangeStatus::Approved => "approved",
            ChangeStatus::Rejected => "rejected",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_moves_to_either_terminal_state() {
        assert_eq!(ChangeStatus::Pending.transition("change-0", Decision::Approve).unwrap(), ChangeStatus::Approved);
        assert_eq!(ChangeStatus::Pending.transition("change-0", Decision::Reject).unwrap(), ChangeStatus::Rejected);
    }

    #[test]
    fn terminal_states_reject_any_further_decision() {
        for from in [ChangeStatus::Approved, ChangeStatus::Rejected] {
            for decision in [Decision::Approve, Decision::Reject] {
                let err = from.transition("change-3", decision).unwrap_err();
                match err {
                    ReviewError::StatusTransition { change_id, from: f, .. } => {
                        assert_eq!(change_id, "change-3");
                        assert_eq!(f, from);
                    }
                    other => panic!("unexpected error: {other:?}"),
                }
            }
        }
    }
}
