//! Assignment service - pairing resolution and admin mutations.
//!
//! Resolution is a read-only equality scan keyed by the caller's role;
//! zero matches is the valid "not yet matched" state. Creation follows
//! the shared mutation pattern: validate locally, then issue a single
//! insert; on failure the caller's state is untouched and nothing is
//! retried.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{MentorshipAssignment, User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::EntityStore;

/// Assignment service trait for dependency injection.
#[async_trait]
pub trait AssignmentService: Send + Sync {
    /// Every assignment, for the admin overview
    async fn list_assignments(&self) -> AppResult<Vec<MentorshipAssignment>>;

    /// Active pairings where the user is the mentor (0..N)
    async fn active_for_mentor(&self, mentor_id: Uuid) -> AppResult<Vec<MentorshipAssignment>>;

    /// Active pairings where the user is the mentee (0 or 1 by invariant)
    async fn active_for_mentee(&self, mentee_id: Uuid) -> AppResult<Vec<MentorshipAssignment>>;

    /// The user on the other side of a pairing. `None` when the
    /// reference dangles or the lookup fails; callers render a
    /// fallback instead of erroring.
    async fn counterpart(&self, assignment: &MentorshipAssignment, of_user: Uuid) -> Option<User>;

    /// Admin pairing creation with name snapshots
    async fn create_assignment(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
    ) -> AppResult<MentorshipAssignment>;

    /// Hard delete; irreversible, no cascade to session logs
    async fn delete_assignment(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of AssignmentService over the entity store.
pub struct AssignmentManager<S: EntityStore> {
    store: Arc<S>,
}

impl<S: EntityStore> AssignmentManager<S> {
    /// Create new assignment service instance
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    async fn require_matchable(&self, id: Uuid, expected: UserRole) -> AppResult<User> {
        let user = self
            .store
            .users()
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::validation(format!("Selected {} does not exist", expected))
            })?;

        if user.role != expected {
            return Err(AppError::validation(format!(
                "{} is not a {}",
                user.name, expected
            )));
        }
        if !user.active() {
            return Err(AppError::validation(format!(
                "{} is deactivated and cannot be matched",
                user.name
            )));
        }

        Ok(user)
    }
}

#[async_trait]
impl<S: EntityStore> AssignmentService for AssignmentManager<S> {
    async fn list_assignments(&self) -> AppResult<Vec<MentorshipAssignment>> {
        self.store.assignments().list().await
    }

    async fn active_for_mentor(&self, mentor_id: Uuid) -> AppResult<Vec<MentorshipAssignment>> {
        self.store.assignments().find_active_by_mentor(mentor_id).await
    }

    async fn active_for_mentee(&self, mentee_id: Uuid) -> AppResult<Vec<MentorshipAssignment>> {
        self.store.assignments().find_active_by_mentee(mentee_id).await
    }

    async fn counterpart(&self, assignment: &MentorshipAssignment, of_user: Uuid) -> Option<User> {
        let other_id = assignment.counterpart_of(of_user)?;
        match self.store.users().find_by_id(other_id).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Counterpart lookup for {} failed: {}", other_id, e);
                None
            }
        }
    }

    async fn create_assignment(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
    ) -> AppResult<MentorshipAssignment> {
        if mentor_id == mentee_id {
            return Err(AppError::validation(
                "Mentor and mentee must be different users",
            ));
        }

        let mentor = self.require_matchable(mentor_id, UserRole::Mentor).await?;
        let mentee = self.require_matchable(mentee_id, UserRole::Mentee).await?;

        // Read-then-write uniqueness check: two concurrent creates can
        // both pass it, since the store offers no conditional insert.
        if self
            .store
            .assignments()
            .find_active_pair(mentor_id, mentee_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("An active assignment for this pair"));
        }

        let assignment = self
            .store
            .assignments()
            .create(mentor_id, mentee_id, mentor.name, mentee.name)
            .await?;

        tracing::info!(
            "Assignment {} created: mentor {} -> mentee {}",
            assignment.id,
            mentor_id,
            mentee_id
        );
        Ok(assignment)
    }

    async fn delete_assignment(&self, id: Uuid) -> AppResult<()> {
        self.store.assignments().delete(id).await?;
        tracing::info!("Assignment {} deleted", id);
        Ok(())
    }
}
