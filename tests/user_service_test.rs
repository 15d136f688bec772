//! User service unit tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use mentorlink::domain::{ProfileUpdate, User, UserRole};
use mentorlink::errors::AppError;
use mentorlink::infra::{
    AssignmentRepository, EntityStore, InterestRepository, MockAssignmentRepository,
    MockInterestRepository, MockSessionRepository, MockUserRepository, SessionRepository,
    UserRepository,
};
use mentorlink::services::{UserManager, UserService};

struct TestStore {
    users: Arc<MockUserRepository>,
}

impl TestStore {
    fn new(users: MockUserRepository) -> Arc<Self> {
        Arc::new(Self {
            users: Arc::new(users),
        })
    }
}

impl EntityStore for TestStore {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn assignments(&self) -> Arc<dyn AssignmentRepository> {
        Arc::new(MockAssignmentRepository::new())
    }

    fn sessions(&self) -> Arc<dyn SessionRepository> {
        Arc::new(MockSessionRepository::new())
    }

    fn interests(&self) -> Arc<dyn InterestRepository> {
        Arc::new(MockInterestRepository::new())
    }
}

fn test_user(id: Uuid, role: UserRole, is_active: Option<bool>) -> User {
    User {
        id,
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        password_hash: "hashed".to_string(),
        role,
        bio: None,
        skills: vec![],
        interests: vec![],
        availability: None,
        profile_picture_url: None,
        is_active,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_get_user_not_found() {
    let user_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users.expect_find_by_id().returning(|_| Ok(None));

    let service = UserManager::new(TestStore::new(users));
    let result = service.get_user(user_id).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_double_toggle_returns_to_original_state() {
    let user_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    // First read: flag never written, user counts as active
    users
        .expect_find_by_id()
        .times(1)
        .returning(move |id| Ok(Some(test_user(id, UserRole::Mentee, None))));
    users
        .expect_set_active()
        .with(eq(user_id), eq(false))
        .times(1)
        .returning(move |id, flag| Ok(test_user(id, UserRole::Mentee, Some(flag))));
    // Fresh read after the first toggle
    users
        .expect_find_by_id()
        .times(1)
        .returning(move |id| Ok(Some(test_user(id, UserRole::Mentee, Some(false)))));
    users
        .expect_set_active()
        .with(eq(user_id), eq(true))
        .times(1)
        .returning(move |id, flag| Ok(test_user(id, UserRole::Mentee, Some(flag))));

    let service = UserManager::new(TestStore::new(users));

    let once = service.toggle_active(user_id).await.unwrap();
    assert!(!once.active());

    let twice = service.toggle_active(user_id).await.unwrap();
    assert!(twice.active());
}

#[tokio::test]
async fn test_get_active_mentor_hides_deactivated_profiles() {
    let mentor_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .returning(move |id| Ok(Some(test_user(id, UserRole::Mentor, Some(false)))));

    let service = UserManager::new(TestStore::new(users));
    let result = service.get_active_mentor(mentor_id).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_get_active_mentor_hides_non_mentor_accounts() {
    let user_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .returning(move |id| Ok(Some(test_user(id, UserRole::Mentee, None))));

    let service = UserManager::new(TestStore::new(users));
    let result = service.get_active_mentor(user_id).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_admin_create_user_rejects_admin_role() {
    let service = UserManager::new(TestStore::new(MockUserRepository::new()));

    let result = service
        .create_user(
            "New Admin".to_string(),
            "new.admin@example.com".to_string(),
            UserRole::Admin,
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_admin_create_user_gets_placeholder_credentials() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().returning(|_| Ok(None));
    users
        .expect_create()
        .withf(|_, _, password_hash, _| !password_hash.is_empty())
        .returning(|name, email, password_hash, role| {
            Ok(User {
                id: Uuid::new_v4(),
                name,
                email,
                password_hash,
                role,
                bio: None,
                skills: vec![],
                interests: vec![],
                availability: None,
                profile_picture_url: None,
                is_active: Some(true),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        });

    let service = UserManager::new(TestStore::new(users));
    let user = service
        .create_user(
            "Sarah Lee".to_string(),
            "sarah.lee@example.com".to_string(),
            UserRole::Mentee,
        )
        .await
        .unwrap();

    assert_eq!(user.role, UserRole::Mentee);
    // Placeholder hash, not an empty or raw credential
    assert!(user.password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn test_update_profile_passes_normalized_lists_through() {
    let user_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users
        .expect_update_profile()
        .withf(|_, update| {
            update.skills.as_deref() == Some(&["Rust".to_string(), "Mentoring".to_string()][..])
        })
        .returning(move |id, update| {
            let mut user = test_user(id, UserRole::Mentor, None);
            user.skills = update.skills.unwrap_or_default();
            Ok(user)
        });

    let service = UserManager::new(TestStore::new(users));
    let update = ProfileUpdate {
        skills: Some(vec!["Rust".to_string(), "Mentoring".to_string()]),
        ..Default::default()
    };

    let user = service.update_profile(user_id, update).await.unwrap();
    assert_eq!(user.skills, vec!["Rust", "Mentoring"]);
}
