//! Interest service unit tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use mentorlink::domain::{InterestRequest, User, UserRole};
use mentorlink::errors::AppError;
use mentorlink::infra::{
    AssignmentRepository, EntityStore, InterestRepository, MockAssignmentRepository,
    MockInterestRepository, MockSessionRepository, MockUserRepository, SessionRepository,
    UserRepository,
};
use mentorlink::services::{InterestManager, InterestService};

struct TestStore {
    users: Arc<MockUserRepository>,
    interests: Arc<MockInterestRepository>,
}

impl TestStore {
    fn new(users: MockUserRepository, interests: MockInterestRepository) -> Arc<Self> {
        Arc::new(Self {
            users: Arc::new(users),
            interests: Arc::new(interests),
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
        self.interests.clone()
    }
}

fn test_user(id: Uuid, name: &str, role: UserRole, is_active: Option<bool>) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
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
async fn test_short_message_fails_before_any_store_access() {
    let service = InterestManager::new(TestStore::new(
        MockUserRepository::new(),
        MockInterestRepository::new(),
    ));
    let mentee = test_user(Uuid::new_v4(), "Chris Green", UserRole::Mentee, None);

    let result = service
        .express_interest(&mentee, Uuid::new_v4(), "Hi".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_interest_in_deactivated_mentor_is_rejected() {
    let mentor_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .with(eq(mentor_id))
        .returning(move |id| {
            Ok(Some(test_user(id, "Eleanor Vance", UserRole::Mentor, Some(false))))
        });

    let service = InterestManager::new(TestStore::new(users, MockInterestRepository::new()));
    let mentee = test_user(Uuid::new_v4(), "Chris Green", UserRole::Mentee, None);

    let result = service
        .express_interest(
            &mentee,
            mentor_id,
            "I would love to learn more about your mentorship.".to_string(),
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_successful_request_snapshots_both_sides() {
    let mentor_id = Uuid::new_v4();
    let mentee_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .with(eq(mentor_id))
        .returning(move |id| Ok(Some(test_user(id, "Eleanor Vance", UserRole::Mentor, None))));

    let mut interests = MockInterestRepository::new();
    interests
        .expect_create()
        .withf(move |new| {
            new.mentor_name == "Eleanor Vance"
                && new.mentee_name == "Chris Green"
                && new.mentee_email == "chris.green@example.com"
        })
        .returning(|new| {
            Ok(InterestRequest {
                id: Uuid::new_v4(),
                mentor_id: new.mentor_id,
                mentor_name: new.mentor_name,
                mentee_id: new.mentee_id,
                mentee_name: new.mentee_name,
                mentee_email: new.mentee_email,
                message: new.message,
                status: "pending".to_string(),
                requested_at: Utc::now(),
            })
        });

    let service = InterestManager::new(TestStore::new(users, interests));
    let mentee = test_user(mentee_id, "Chris Green", UserRole::Mentee, None);

    let request = service
        .express_interest(
            &mentee,
            mentor_id,
            "I would love to learn more about your mentorship.".to_string(),
        )
        .await
        .unwrap();

    assert_eq!(request.status, "pending");
    assert_eq!(request.mentor_name, "Eleanor Vance");
    assert_eq!(request.mentee_name, "Chris Green");
}

#[tokio::test]
async fn test_pending_requests_pass_through() {
    let mentor_id = Uuid::new_v4();

    let mut interests = MockInterestRepository::new();
    interests
        .expect_list_pending_by_mentor()
        .with(eq(mentor_id))
        .returning(|id| {
            Ok(vec![InterestRequest {
                id: Uuid::new_v4(),
                mentor_id: id,
                mentor_name: "Eleanor Vance".to_string(),
                mentee_id: Uuid::new_v4(),
                mentee_name: "Chris Green".to_string(),
                mentee_email: "chris.g@example.com".to_string(),
                message: "I would love to learn from you.".to_string(),
                status: "pending".to_string(),
                requested_at: Utc::now(),
            }])
        });

    let service = InterestManager::new(TestStore::new(MockUserRepository::new(), interests));
    let pending = service.pending_for_mentor(mentor_id).await.unwrap();

    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].status, "pending");
}
