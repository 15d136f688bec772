//! Mentorship assignment repository implementation.
//!
//! Resolver queries are equality scans keyed by the role-qualifying ID
//! plus `status = active`; zero matches is the valid "not yet matched"
//! state and never an error.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::assignment::{self, ActiveModel, Entity as AssignmentEntity};
use crate::domain::{AssignmentStatus, MentorshipAssignment};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Assignment repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Find assignment by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MentorshipAssignment>>;

    /// Active assignments where the user is the mentor (0..N)
    async fn find_active_by_mentor(&self, mentor_id: Uuid)
        -> AppResult<Vec<MentorshipAssignment>>;

    /// Active assignments where the user is the mentee (expected 0 or 1)
    async fn find_active_by_mentee(&self, mentee_id: Uuid)
        -> AppResult<Vec<MentorshipAssignment>>;

    /// Active assignment for an exact pair, if one exists
    async fn find_active_pair(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
    ) -> AppResult<Option<MentorshipAssignment>>;

    /// Create an active assignment with name snapshots
    async fn create(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
        mentor_name: String,
        mentee_name: String,
    ) -> AppResult<MentorshipAssignment>;

    /// Hard delete; irreversible, does not cascade
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Every assignment regardless of status
    async fn list(&self) -> AppResult<Vec<MentorshipAssignment>>;
}

/// Concrete implementation of AssignmentRepository over SeaORM
pub struct AssignmentStore {
    db: DatabaseConnection,
}

impl AssignmentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_active_by(
        &self,
        column: assignment::Column,
        id: Uuid,
    ) -> AppResult<Vec<MentorshipAssignment>> {
        let models = AssignmentEntity::find()
            .filter(column.eq(id))
            .filter(assignment::Column::Status.eq(AssignmentStatus::Active.as_str()))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(MentorshipAssignment::from).collect())
    }
}

#[async_trait]
impl AssignmentRepository for AssignmentStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MentorshipAssignment>> {
        let result = AssignmentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(MentorshipAssignment::from))
    }

    async fn find_active_by_mentor(
        &self,
        mentor_id: Uuid,
    ) -> AppResult<Vec<MentorshipAssignment>> {
        self.find_active_by(assignment::Column::MentorId, mentor_id)
            .await
    }

    async fn find_active_by_mentee(
        &self,
        mentee_id: Uuid,
    ) -> AppResult<Vec<MentorshipAssignment>> {
        self.find_active_by(assignment::Column::MenteeId, mentee_id)
            .await
    }

    async fn find_active_pair(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
    ) -> AppResult<Option<MentorshipAssignment>> {
        let result = AssignmentEntity::find()
            .filter(assignment::Column::MentorId.eq(mentor_id))
            .filter(assignment::Column::MenteeId.eq(mentee_id))
            .filter(assignment::Column::Status.eq(AssignmentStatus::Active.as_str()))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(MentorshipAssignment::from))
    }

    async fn create(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
        mentor_name: String,
        mentee_name: String,
    ) -> AppResult<MentorshipAssignment> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            mentor_id: Set(mentor_id),
            mentee_id: Set(mentee_id),
            mentor_name: Set(mentor_name),
            mentee_name: Set(mentee_name),
            start_date: Set(chrono::Utc::now()),
            status: Set(AssignmentStatus::Active.to_string()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(MentorshipAssignment::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = AssignmentEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<MentorshipAssignment>> {
        let models = AssignmentEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(MentorshipAssignment::from).collect())
    }
}
