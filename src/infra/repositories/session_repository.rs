//! Session log repository implementation.
//!
//! Session rows are append-only in the flows shipped so far; there is
//! no update or delete path here.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::session_log::{self, ActiveModel, Entity as SessionEntity};
use crate::domain::{SessionLog, SessionStatus};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fields for a new session log row.
#[derive(Debug, Clone)]
pub struct NewSessionLog {
    pub mentor_id: Uuid,
    pub mentee_id: Uuid,
    pub mentor_name: String,
    pub mentee_name: String,
    pub topic: String,
    pub session_date: chrono::DateTime<chrono::Utc>,
    pub duration_minutes: Option<i32>,
    pub notes: Option<String>,
    pub status: SessionStatus,
}

/// Session repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Find session by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<SessionLog>>;

    /// Insert a new session row
    async fn create(&self, new: NewSessionLog) -> AppResult<SessionLog>;

    /// Sessions where the user is the mentor
    async fn list_by_mentor(&self, mentor_id: Uuid) -> AppResult<Vec<SessionLog>>;

    /// Sessions where the user is the mentee
    async fn list_by_mentee(&self, mentee_id: Uuid) -> AppResult<Vec<SessionLog>>;

    /// Every session log
    async fn list(&self) -> AppResult<Vec<SessionLog>>;
}

/// Concrete implementation of SessionRepository over SeaORM
pub struct SessionStore {
    db: DatabaseConnection,
}

impl SessionStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn list_by(&self, column: session_log::Column, id: Uuid) -> AppResult<Vec<SessionLog>> {
        let models = SessionEntity::find()
            .filter(column.eq(id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(SessionLog::from).collect())
    }
}

#[async_trait]
impl SessionRepository for SessionStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<SessionLog>> {
        let result = SessionEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(SessionLog::from))
    }

    async fn create(&self, new: NewSessionLog) -> AppResult<SessionLog> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            mentor_id: Set(new.mentor_id),
            mentee_id: Set(new.mentee_id),
            mentor_name: Set(new.mentor_name),
            mentee_name: Set(new.mentee_name),
            topic: Set(new.topic),
            session_date: Set(new.session_date),
            duration_minutes: Set(new.duration_minutes),
            notes: Set(new.notes),
            status: Set(new.status.to_string()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(SessionLog::from(model))
    }

    async fn list_by_mentor(&self, mentor_id: Uuid) -> AppResult<Vec<SessionLog>> {
        self.list_by(session_log::Column::MentorId, mentor_id).await
    }

    async fn list_by_mentee(&self, mentee_id: Uuid) -> AppResult<Vec<SessionLog>> {
        self.list_by(session_log::Column::MenteeId, mentee_id).await
    }

    async fn list(&self) -> AppResult<Vec<SessionLog>> {
        let models = SessionEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(SessionLog::from).collect())
    }
}
