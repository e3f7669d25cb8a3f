use serde::{Deserialize, Serialize};
use crate::enums::change_status::ChangeStatus;

/// A reviewer's verdict on one change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    #[serde(alias = "approved")]
    Approve,
    #[serde(alias = "rejected")]
    Reject,
}

impl Decision {
    pub fn target_status(&self) -> ChangeStatus {
        match self {
            Decision::Approve => ChangeStatus::Approved,
            Decision::Reject => ChangeStatus::Rejected,
        }
    }
}

impl From<bool> for Decision {
    fn from(approved: bool) -> Self {
        if approved { Decision::Approve } else { Decision::Reject }
    }
}
