use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::enums::review_stage::ReviewStage;
use crate::enums::session_status::SessionStatus;
use crate::services::contract_review::ContractReview;
use crate::structs::change::Change;
use crate::structs::review_summary::ReviewSummary;
use crate::structs::unapplied_span::UnappliedSpan;

#[derive(Clone)]
pub struct ReviewSession {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub original_name: String,
    pub modified_name: String,
    pub status: SessionStatus,
    pub review: ContractReview,
}

impl ReviewSession {
    pub fn view(&self) -> SessionView {
        let outcome = self.review.outcome();
        SessionView {
            id: self.id.clone(),
            created_at: self.created_at,
            original_name: self.original_name.clone(),
            modified_name: self.modified_name.clone(),
            status: self.status,
            stage: self.review.stage(),
            changes: self.review.changes().to_vec(),
            summary: self.review.summary(),
            final_text: outcome.map(|o| o.text.clone()),
            unapplied: outcome.map(|o| o.unapplied.clone()).unwrap_or_default(),
        }
    }
}

/// What the review page sees of a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub original_name: String,
    pub modified_name: String,
    pub status: SessionStatus,
    pub stage: ReviewStage,
    pub changes: Vec<Change>,
    pub summary: ReviewSummary,
    pub final_text: Option<String>,
    pub unapplied: Vec<UnappliedSpan>,
}
