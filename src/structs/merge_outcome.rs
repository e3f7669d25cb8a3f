use serde::{Deserialize, Serialize};
use crate::structs::unapplied_span::UnappliedSpan;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOutcome {
    pub text: String,
    pub applied: usize,
    pub unapplied: Vec<UnappliedSpan>,
}

impl MergeOutcome {
    pub fn is_clean(&self) -> bool {
        self.unapplied.is_empty()
    }
}
