//! User repository implementation.
//!
//! Queries are equality-filtered scans and point lookups only; the
//! matching-pool query additionally treats a NULL activity flag as
//! active.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity, StringList};
use crate::domain::{ProfileUpdate, User, UserRole};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Create a new user
    async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
        role: UserRole,
    ) -> AppResult<User>;

    /// Update the caller-editable profile fields
    async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> AppResult<User>;

    /// Single-field role update
    async fn set_role(&self, id: Uuid, role: UserRole) -> AppResult<User>;

    /// Write the activity flag (deactivation is the soft-delete mechanism)
    async fn set_active(&self, id: Uuid, active: bool) -> AppResult<User>;

    /// List every user, including deactivated ones
    async fn list(&self) -> AppResult<Vec<User>>;

    /// The mentor matching pool: role = mentor and not deactivated
    async fn list_active_mentors(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository over SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch_model(&self, id: Uuid) -> AppResult<user::Model> {
        UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .ok_or(AppError::NotFound)
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
        role: UserRole,
    ) -> AppResult<User> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            email: Set(email),
            password_hash: Set(password_hash),
            role: Set(role.to_string()),
            bio: Set(None),
            skills: Set(StringList::default()),
            interests: Set(StringList::default()),
            availability: Set(None),
            profile_picture_url: Set(None),
            is_active: Set(Some(true)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> AppResult<User> {
        let mut active: ActiveModel = self.fetch_model(id).await?.into();

        if let Some(bio) = update.bio {
            active.bio = Set(Some(bio));
        }
        if let Some(skills) = update.skills {
            active.skills = Set(StringList(skills));
        }
        if let Some(interests) = update.interests {
            active.interests = Set(StringList(interests));
        }
        if let Some(availability) = update.availability {
            active.availability = Set(Some(availability));
        }
        if let Some(url) = update.profile_picture_url {
            active.profile_picture_url = Set(Some(url));
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn set_role(&self, id: Uuid, role: UserRole) -> AppResult<User> {
        let mut active: ActiveModel = self.fetch_model(id).await?.into();
        active.role = Set(role.to_string());
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn set_active(&self, id: Uuid, active_flag: bool) -> AppResult<User> {
        let mut active: ActiveModel = self.fetch_model(id).await?.into();
        active.is_active = Set(Some(active_flag));
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn list_active_mentors(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .filter(user::Column::Role.eq(UserRole::Mentor.as_str()))
            .filter(
                Condition::any()
                    .add(user::Column::IsActive.is_null())
                    .add(user::Column::IsActive.eq(true)),
            )
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
