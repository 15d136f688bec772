//! Interest request repository implementation.
//!
//! `requested_at` is filled by the database's own clock (column
//! default), so request ordering does not depend on app-server clocks.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    Set,
};
use uuid::Uuid;

use super::entities::interest_request::{self, ActiveModel, Entity as InterestEntity};
use crate::config::INTEREST_STATUS_PENDING;
use crate::domain::InterestRequest;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fields for a new interest request row.
#[derive(Debug, Clone)]
pub struct NewInterestRequest {
    pub mentor_id: Uuid,
    pub mentor_name: String,
    pub mentee_id: Uuid,
    pub mentee_name: String,
    pub mentee_email: String,
    pub message: String,
}

/// Interest request repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait InterestRepository: Send + Sync {
    /// Insert a pending request
    async fn create(&self, new: NewInterestRequest) -> AppResult<InterestRequest>;

    /// Pending requests addressed to a mentor
    async fn list_pending_by_mentor(&self, mentor_id: Uuid) -> AppResult<Vec<InterestRequest>>;
}

/// Concrete implementation of InterestRepository over SeaORM
pub struct InterestStore {
    db: DatabaseConnection,
}

impl InterestStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InterestRepository for InterestStore {
    async fn create(&self, new: NewInterestRequest) -> AppResult<InterestRequest> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            mentor_id: Set(new.mentor_id),
            mentor_name: Set(new.mentor_name),
            mentee_id: Set(new.mentee_id),
            mentee_name: Set(new.mentee_name),
            mentee_email: Set(new.mentee_email),
            message: Set(new.message),
            status: Set(INTEREST_STATUS_PENDING.to_string()),
            // Left unset so the column default (database now()) applies
            requested_at: NotSet,
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(InterestRequest::from(model))
    }

    async fn list_pending_by_mentor(&self, mentor_id: Uuid) -> AppResult<Vec<InterestRequest>> {
        let models = InterestEntity::find()
            .filter(interest_request::Column::MentorId.eq(mentor_id))
            .filter(interest_request::Column::Status.eq(INTEREST_STATUS_PENDING))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(InterestRequest::from).collect())
    }
}
