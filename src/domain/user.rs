//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{ROLE_ADMIN, ROLE_MENTEE, ROLE_MENTOR};

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Mentor,
    Mentee,
    Admin,
}

impl UserRole {
    /// Parse a stored role value; `None` for anything unrecognized
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            ROLE_MENTOR => Some(UserRole::Mentor),
            ROLE_MENTEE => Some(UserRole::Mentee),
            ROLE_ADMIN => Some(UserRole::Admin),
            _ => None,
        }
    }

    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Roles a user may select at registration (admin is granted, never chosen)
    pub fn is_registrable(&self) -> bool {
        matches!(self, UserRole::Mentor | UserRole::Mentee)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Mentor => ROLE_MENTOR,
            UserRole::Mentee => ROLE_MENTEE,
            UserRole::Admin => ROLE_ADMIN,
        }
    }
}

impl From<&str> for UserRole {
    /// Lossy conversion for values already persisted; unknown strings map
    /// to the least-privileged role.
    fn from(s: &str) -> Self {
        UserRole::parse(s).unwrap_or(UserRole::Mentee)
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User domain entity.
///
/// `is_active` is tri-state in storage: `None` means the flag was never
/// written and the user counts as active. Deactivation is the platform's
/// soft-delete: it removes the user from matching pools but leaves every
/// historical assignment and session referencing the ID intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub availability: Option<String>,
    pub profile_picture_url: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Effective activity flag: an unset flag counts as active
    pub fn active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }

    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// User display name
    #[schema(example = "Eleanor Vance")]
    pub name: String,
    /// User email address
    #[schema(example = "mentor@example.com")]
    pub email: String,
    /// User role
    #[schema(example = "mentor")]
    pub role: String,
    /// Short introduction shown on profile cards
    pub bio: Option<String>,
    /// Skills offered or held
    pub skills: Vec<String>,
    /// Topics the user wants to focus on
    pub interests: Vec<String>,
    /// Freeform availability description
    pub availability: Option<String>,
    /// Avatar URL
    pub profile_picture_url: Option<String>,
    /// Effective activity flag (deactivated users are excluded from matching)
    pub is_active: bool,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let is_active = user.active();
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role.to_string(),
            bio: user.bio,
            skills: user.skills,
            interests: user.interests,
            availability: user.availability,
            profile_picture_url: user.profile_picture_url,
            is_active,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user_with_flag(flag: Option<bool>) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Mentee,
            bio: None,
            skills: vec![],
            interests: vec![],
            availability: None,
            profile_picture_url: None,
            is_active: flag,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn unset_activity_flag_counts_as_active() {
        assert!(user_with_flag(None).active());
        assert!(user_with_flag(Some(true)).active());
        assert!(!user_with_flag(Some(false)).active());
    }

    #[test]
    fn role_parsing_round_trips() {
        for role in [UserRole::Mentor, UserRole::Mentee, UserRole::Admin] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("superuser"), None);
    }

    #[test]
    fn admin_is_not_registrable() {
        assert!(UserRole::Mentor.is_registrable());
        assert!(UserRole::Mentee.is_registrable());
        assert!(!UserRole::Admin.is_registrable());
    }
}
