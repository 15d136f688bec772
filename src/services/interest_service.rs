//! Interest service - mentee-to-mentor interest requests.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{MAX_INTEREST_MESSAGE_LENGTH, MIN_INTEREST_MESSAGE_LENGTH};
use crate::domain::{InterestRequest, User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::{EntityStore, NewInterestRequest};

/// Interest service trait for dependency injection.
#[async_trait]
pub trait InterestService: Send + Sync {
    /// Mentee sends an interest message to a mentor in the browsable pool
    async fn express_interest(
        &self,
        mentee: &User,
        mentor_id: Uuid,
        message: String,
    ) -> AppResult<InterestRequest>;

    /// Pending requests addressed to a mentor, for their dashboard
    async fn pending_for_mentor(&self, mentor_id: Uuid) -> AppResult<Vec<InterestRequest>>;
}

/// Concrete implementation of InterestService over the entity store.
pub struct InterestManager<S: EntityStore> {
    store: Arc<S>,
}

impl<S: EntityStore> InterestManager<S> {
    /// Create new interest service instance
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: EntityStore> InterestService for InterestManager<S> {
    async fn express_interest(
        &self,
        mentee: &User,
        mentor_id: Uuid,
        message: String,
    ) -> AppResult<InterestRequest> {
        let message = message.trim().to_string();
        let len = message.chars().count() as u64;
        if !(MIN_INTEREST_MESSAGE_LENGTH..=MAX_INTEREST_MESSAGE_LENGTH).contains(&len) {
            return Err(AppError::validation(format!(
                "Message must be between {} and {} characters",
                MIN_INTEREST_MESSAGE_LENGTH, MAX_INTEREST_MESSAGE_LENGTH
            )));
        }

        let mentor = self
            .store
            .users()
            .find_by_id(mentor_id)
            .await?
            .filter(|u| u.role == UserRole::Mentor && u.active())
            .ok_or_else(|| AppError::validation("This mentor is not available"))?;

        self.store
            .interests()
            .create(NewInterestRequest {
                mentor_id,
                mentor_name: mentor.name,
                mentee_id: mentee.id,
                mentee_name: mentee.name.clone(),
                mentee_email: mentee.email.clone(),
                message,
            })
            .await
    }

    async fn pending_for_mentor(&self, mentor_id: Uuid) -> AppResult<Vec<InterestRequest>> {
        self.store.interests().list_pending_by_mentor(mentor_id).await
    }
}
