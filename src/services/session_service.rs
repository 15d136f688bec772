//! Session service - scheduling, mentor notes, and the temporal views.
//!
//! Mentor notes share the session collection, distinguished by a fixed
//! topic sentinel and a forced `completed` status with the current time
//! as the session date.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{
    MAX_FEEDBACK_RATING, MENTOR_NOTE_TOPIC, MIN_FEEDBACK_RATING, UNKNOWN_USER_NAME,
};
use crate::domain::{
    partition_sessions, SessionLog, SessionPartition, SessionStatus, UserRole,
};
use crate::errors::{AppError, AppResult};
use crate::infra::{EntityStore, NewSessionLog};

/// Session service trait for dependency injection.
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Mentor schedules a session with a mentee
    async fn schedule_session(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
        topic: String,
        session_date: DateTime<Utc>,
        duration_minutes: Option<i32>,
    ) -> AppResult<SessionLog>;

    /// Mentor records a freeform note against a mentee
    async fn add_note(&self, mentor_id: Uuid, mentee_id: Uuid, text: String)
        -> AppResult<SessionLog>;

    /// Raw session rows visible to a user in a given role
    async fn sessions_for(&self, role: UserRole, user_id: Uuid) -> AppResult<Vec<SessionLog>>;

    /// Sessions split into upcoming and past relative to `now`
    async fn partitioned_for(
        &self,
        role: UserRole,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<SessionPartition>;

    /// Mentee submits feedback on a session. Input is validated and the
    /// submission acknowledged, but nothing is persisted yet.
    async fn submit_feedback(
        &self,
        session_id: Uuid,
        rating: Option<u8>,
        text: Option<String>,
    ) -> AppResult<()>;
}

/// Concrete implementation of SessionService over the entity store.
pub struct SessionManager<S: EntityStore> {
    store: Arc<S>,
}

impl<S: EntityStore> SessionManager<S> {
    /// Create new session service instance
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Display name snapshot for a user ID; dangling or failed lookups
    /// degrade to the fallback placeholder rather than erroring.
    async fn display_name(&self, id: Uuid) -> String {
        match self.store.users().find_by_id(id).await {
            Ok(Some(user)) => user.name,
            Ok(None) => UNKNOWN_USER_NAME.to_string(),
            Err(e) => {
                tracing::warn!("Name lookup for {} failed: {}", id, e);
                UNKNOWN_USER_NAME.to_string()
            }
        }
    }
}

#[async_trait]
impl<S: EntityStore> SessionService for SessionManager<S> {
    async fn schedule_session(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
        topic: String,
        session_date: DateTime<Utc>,
        duration_minutes: Option<i32>,
    ) -> AppResult<SessionLog> {
        let topic = topic.trim().to_string();
        if topic.is_empty() {
            return Err(AppError::validation("Topic is required"));
        }

        let mentor_name = self.display_name(mentor_id).await;
        let mentee_name = self.display_name(mentee_id).await;

        self.store
            .sessions()
            .create(NewSessionLog {
                mentor_id,
                mentee_id,
                mentor_name,
                mentee_name,
                topic,
                session_date,
                duration_minutes,
                notes: None,
                status: SessionStatus::Scheduled,
            })
            .await
    }

    async fn add_note(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
        text: String,
    ) -> AppResult<SessionLog> {
        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(AppError::validation("Note text is required"));
        }

        let mentor_name = self.display_name(mentor_id).await;
        let mentee_name = self.display_name(mentee_id).await;

        self.store
            .sessions()
            .create(NewSessionLog {
                mentor_id,
                mentee_id,
                mentor_name,
                mentee_name,
                topic: MENTOR_NOTE_TOPIC.to_string(),
                session_date: Utc::now(),
                duration_minutes: None,
                notes: Some(text),
                status: SessionStatus::Completed,
            })
            .await
    }

    async fn sessions_for(&self, role: UserRole, user_id: Uuid) -> AppResult<Vec<SessionLog>> {
        match role {
            UserRole::Mentor => self.store.sessions().list_by_mentor(user_id).await,
            UserRole::Mentee => self.store.sessions().list_by_mentee(user_id).await,
            UserRole::Admin => self.store.sessions().list().await,
        }
    }

    async fn partitioned_for(
        &self,
        role: UserRole,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<SessionPartition> {
        let sessions = self.sessions_for(role, user_id).await?;
        Ok(partition_sessions(sessions, now))
    }

    async fn submit_feedback(
        &self,
        session_id: Uuid,
        rating: Option<u8>,
        text: Option<String>,
    ) -> AppResult<()> {
        let rating_ok =
            rating.is_some_and(|r| (MIN_FEEDBACK_RATING..=MAX_FEEDBACK_RATING).contains(&r));
        let text_ok = text.as_deref().is_some_and(|t| !t.trim().is_empty());

        if !rating_ok && !text_ok {
            return Err(AppError::validation(
                "Provide a rating between 1 and 5 or some feedback text",
            ));
        }

        // TODO: persist feedback on the session row once the feedback
        // columns exist; for now submissions are acknowledged and logged.
        tracing::info!(
            "Feedback received for session {}: rating={:?}, text_len={}",
            session_id,
            rating,
            text.as_deref().map(str::len).unwrap_or(0)
        );

        Ok(())
    }
}
