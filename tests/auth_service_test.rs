//! Authentication service unit tests.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use mentorlink::config::Config;
use mentorlink::domain::{Password, User, UserRole};
use mentorlink::errors::AppError;
use mentorlink::infra::{
    AssignmentRepository, EntityStore, InterestRepository, MockAssignmentRepository,
    MockInterestRepository, MockSessionRepository, MockUserRepository, SessionRepository,
    UserRepository,
};
use mentorlink::services::{AuthService, Authenticator};

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

fn test_config() -> Config {
    Config::for_tests("test-secret-key-for-testing-only-32chars")
}

fn stored_user(email: &str, password: &str, role: UserRole) -> User {
    User {
        id: Uuid::new_v4(),
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: Password::new(password).unwrap().into_string(),
        role,
        bio: None,
        skills: vec![],
        interests: vec![],
        availability: None,
        profile_picture_url: None,
        is_active: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_register_rejects_admin_role_without_store_access() {
    // No expectations: any store call would panic
    let service = Authenticator::new(TestStore::new(MockUserRepository::new()), test_config());

    let result = service
        .register(
            "Sneaky".to_string(),
            "sneaky@example.com".to_string(),
            "SecurePass123".to_string(),
            UserRole::Admin,
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .returning(|email| Ok(Some(stored_user(email, "SecurePass123", UserRole::Mentee))));

    let service = Authenticator::new(TestStore::new(users), test_config());
    let result = service
        .register(
            "Alex Johnson".to_string(),
            "alex.j@example.com".to_string(),
            "SecurePass123".to_string(),
            UserRole::Mentee,
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_register_creates_user_with_hashed_password() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().returning(|_| Ok(None));
    users
        .expect_create()
        .withf(|_, _, password_hash, role| {
            // The raw password never reaches the store
            password_hash != "SecurePass123" && *role == UserRole::Mentor
        })
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

    let service = Authenticator::new(TestStore::new(users), test_config());
    let user = service
        .register(
            "Eleanor Vance".to_string(),
            "mentor@example.com".to_string(),
            "SecurePass123".to_string(),
            UserRole::Mentor,
        )
        .await
        .unwrap();

    assert_eq!(user.role, UserRole::Mentor);
    assert!(Password::from_hash(user.password_hash).verify("SecurePass123"));
}

#[tokio::test]
async fn test_login_issues_verifiable_token_with_role_claim() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().returning(|email| {
        Ok(Some(stored_user(email, "SecurePass123", UserRole::Mentor)))
    });

    let service = Authenticator::new(TestStore::new(users), test_config());
    let token = service
        .login("mentor@example.com".to_string(), "SecurePass123".to_string())
        .await
        .unwrap();

    assert_eq!(token.token_type, "Bearer");

    let claims = service.verify_token(&token.access_token).unwrap();
    assert_eq!(claims.email, "mentor@example.com");
    assert_eq!(claims.role, "mentor");
}

#[tokio::test]
async fn test_login_with_wrong_password_fails() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().returning(|email| {
        Ok(Some(stored_user(email, "SecurePass123", UserRole::Mentee)))
    });

    let service = Authenticator::new(TestStore::new(users), test_config());
    let result = service
        .login("mentee@example.com".to_string(), "WrongPassword".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_with_unknown_email_fails_identically() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().returning(|_| Ok(None));

    let service = Authenticator::new(TestStore::new(users), test_config());
    let result = service
        .login("nobody@example.com".to_string(), "SecurePass123".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let service = Authenticator::new(TestStore::new(MockUserRepository::new()), test_config());
    assert!(service.verify_token("not-a-token").is_err());
}
