use std::sync::Arc;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;
use crate::enums::change_status::ChangeStatus;
use crate::enums::decision::Decision;
use crate::enums::session_status::SessionStatus;
use crate::errors::{ReviewError, ReviewResult};
use crate::services::contract_review::ContractReview;
use crate::services::diff_engine::DiffEngine;
use crate::services::merge_applier::MergeApplier;
use crate::structs::diff::review_session::ReviewSession;
use crate::structs::merge_outcome::MergeOutcome;

pub struct SessionManager {
    sessions: Arc<DashMap<String, ReviewSession>>,
    engine: DiffEngine,
    applier: MergeApplier,
}

impl SessionManager {
    pub fn new(engine: DiffEngine, applier: MergeApplier) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            engine,
            applier,
        }
    }

    pub fn create_session(&self, original_name: &str, original: &str, modified_name: &str, modified: &str) -> ReviewResult<String> {
        let session_id = Uuid::new_v4().to_string();

        let mut review = ContractReview::new(self.engine.clone(), self.applier);
        review.start(original, modified)?;

        let session = ReviewSession {
            id: session_id.clone(),
            created_at: Utc::now(),
            original_name: original_name.to_string(),
            modified_name: modified_name.to_string(),
            status: SessionStatus::Active,
            review,
        };

        log::info!("🆕 Review session {} with {} changes", session_id, session.review.changes().len());
        self.sessions.insert(session_id.clone(), session);
        Ok(session_id)
    }

    pub fn get_session(&self, session_id: &str) -> Option<ReviewSession> {
        self.sessions.get(session_id).map(|entry| entry.clone())
    }

    pub fn decide(&self, session_id: &str, change_id: &str, decision: Decision) -> ReviewResult<ChangeStatus> {
        let mut session = self.active_session(session_id)?;
        session.review.decide(change_id, decision)
    }

    /// Runs the pending gate and merge. A validation failure leaves the
    /// session active so the reviewer can finish and retry.
    pub fn complete_session(&self, session_id: &str) -> ReviewResult<MergeOutcome> {
        let mut session = self.active_session(session_id)?;
        let outcome = session.review.complete_review()?.clone();
        session.status = SessionStatus::Completed;
        log::info!("🏁 Review session {} completed", session_id);
        Ok(outcome)
    }

    pub fn cancel_session(&self, session_id: &str) -> ReviewResult<()> {
        let mut session = self.active_session(session_id)?;
        session.status = SessionStatus::Cancelled;
        log::info!("🚫 Review session {} cancelled", session_id);
        Ok(())
    }

    /// Drops every session that is no longer active.
    pub fn cleanup_finished_sessions(&self) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| session.status.is_active());
        before - self.sessions.len()
    }

    fn active_session(&self, session_id: &str) -> ReviewResult<dashmap::mapref::one::RefMut<'_, String, ReviewSession>> {
        let session = self.sessions
            .get_mut(session_id)
            .ok_or_else(|| ReviewError::SessionNotFound { session_id: session_id.to_string() })?;

        if !session.status.is_active() {
            return Err(ReviewError::system_error(
                "update session",
                &format!("session {} is {}", session_id, session.status),
            ));
        }
        Ok(session)
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(DiffEngine::default(), MergeApplier::default())
    }
}
