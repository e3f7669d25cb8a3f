use serde::{Deserialize, Serialize};
use crate::errors::ReviewError;

/// A span the merge applier could not locate in the current line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnappliedSpan {
    pub change_id: String,
    pub line_number: usize,
    pub span: String,
    pub reason: String,
}

impl UnappliedSpan {
    pub fn new(change_id: &str, line_number: usize, span: &str, reason: &str) -> Self {
        Self {
            change_id: change_id.to_string(),
            line_number,
            span: span.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<UnappliedSpan> for ReviewError {
    fn from(span: UnappliedSpan) -> Self {
        ReviewError::UnappliedSpan {
            change_id: span.change_id,
            line_number: span.line_number,
            span: span.span,
            reason: span.reason,
        }
    }
}
