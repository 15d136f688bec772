//! User service - Handles user-related business logic.
//!
//! Covers the roster and matching-pool reads plus the three account
//! mutations: profile updates, role changes, and the activity toggle
//! that doubles as soft delete.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Password, ProfileUpdate, User, UserRole};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::EntityStore;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// Look up a user that may legitimately be missing (dangling reference)
    async fn find_user(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Full roster, including deactivated accounts
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// The browsable mentor pool (active mentors only)
    async fn list_active_mentors(&self) -> AppResult<Vec<User>>;

    /// A single mentor profile from the browsable pool
    async fn get_active_mentor(&self, id: Uuid) -> AppResult<User>;

    /// Admin-created account (placeholder credentials)
    async fn create_user(&self, name: String, email: String, role: UserRole) -> AppResult<User>;

    /// Update the caller's own profile fields
    async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> AppResult<User>;

    /// Admin role change. Existing assignments are not revalidated: a
    /// demoted mentor keeps mentor-side pairings, which then dangle.
    async fn update_role(&self, id: Uuid, role: UserRole) -> AppResult<User>;

    /// Flip the activity flag; an unset flag counts as active. Does not
    /// cascade to assignments or sessions.
    async fn toggle_active(&self, id: Uuid) -> AppResult<User>;
}

/// Concrete implementation of UserService over the entity store.
pub struct UserManager<S: EntityStore> {
    store: Arc<S>,
}

impl<S: EntityStore> UserManager<S> {
    /// Create new user service instance
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: EntityStore> UserService for UserManager<S> {
    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.store.users().find_by_id(id).await?.ok_or_not_found()
    }

    async fn find_user(&self, id: Uuid) -> AppResult<Option<User>> {
        self.store.users().find_by_id(id).await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.store.users().list().await
    }

    async fn list_active_mentors(&self) -> AppResult<Vec<User>> {
        self.store.users().list_active_mentors().await
    }

    async fn get_active_mentor(&self, id: Uuid) -> AppResult<User> {
        let user = self
            .store
            .users()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        // Deactivated or non-mentor profiles are not browsable
        if user.role != UserRole::Mentor || !user.active() {
            return Err(AppError::NotFound);
        }

        Ok(user)
    }

    async fn create_user(&self, name: String, email: String, role: UserRole) -> AppResult<User> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        if !role.is_registrable() {
            return Err(AppError::validation(
                "Role must be either 'mentor' or 'mentee'",
            ));
        }
        if self.store.users().find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("An account with this email"));
        }

        // Admin-created accounts get throwaway credentials; the owner
        // signs in only after registering properly with the same email.
        let placeholder = Password::new(&Uuid::new_v4().to_string())?.into_string();
        self.store.users().create(name, email, placeholder, role).await
    }

    async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> AppResult<User> {
        self.store.users().update_profile(id, update).await
    }

    async fn update_role(&self, id: Uuid, role: UserRole) -> AppResult<User> {
        self.store.users().set_role(id, role).await
    }

    async fn toggle_active(&self, id: Uuid) -> AppResult<User> {
        let user = self.store.users().find_by_id(id).await?.ok_or_not_found()?;

        // Unset flag counts as active, so the first toggle deactivates
        self.store.users().set_active(id, !user.active()).await
    }
}
