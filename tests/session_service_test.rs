//! Session service unit tests.

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use mockall::predicate::eq;
use uuid::Uuid;

use mentorlink::domain::{SessionLog, SessionStatus, User, UserRole};
use mentorlink::errors::AppError;
use mentorlink::infra::{
    AssignmentRepository, EntityStore, InterestRepository, MockAssignmentRepository,
    MockInterestRepository, MockSessionRepository, MockUserRepository, SessionRepository,
    UserRepository,
};
use mentorlink::services::{
    AssignmentManager, AssignmentService, SessionManager, SessionService,
};

struct TestStore {
    users: Arc<MockUserRepository>,
    assignments: Arc<MockAssignmentRepository>,
    sessions: Arc<MockSessionRepository>,
    interests: Arc<MockInterestRepository>,
}

impl TestStore {
    fn new(users: MockUserRepository, sessions: MockSessionRepository) -> Self {
        Self {
            users: Arc::new(users),
            assignments: Arc::new(MockAssignmentRepository::new()),
            sessions: Arc::new(sessions),
            interests: Arc::new(MockInterestRepository::new()),
        }
    }

    fn with_assignments(mut self, assignments: MockAssignmentRepository) -> Self {
        self.assignments = Arc::new(assignments);
        self
    }
}

impl EntityStore for TestStore {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn assignments(&self) -> Arc<dyn AssignmentRepository> {
        self.assignments.clone()
    }

    fn sessions(&self) -> Arc<dyn SessionRepository> {
        self.sessions.clone()
    }

    fn interests(&self) -> Arc<dyn InterestRepository> {
        self.interests.clone()
    }
}

fn test_user(id: Uuid, name: &str, role: UserRole) -> User {
    User {
        id,
        name: name.to_string(),
        email: "user@example.com".to_string(),
        password_hash: "hashed".to_string(),
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

fn test_session(
    mentor_id: Uuid,
    mentee_id: Uuid,
    status: SessionStatus,
    date: chrono::DateTime<Utc>,
) -> SessionLog {
    SessionLog {
        id: Uuid::new_v4(),
        mentor_id,
        mentee_id,
        mentor_name: "Eleanor Vance".to_string(),
        mentee_name: "Alex Johnson".to_string(),
        topic: "Career goals".to_string(),
        session_date: date,
        duration_minutes: Some(60),
        notes: None,
        status,
    }
}

fn echo_created(sessions: &mut MockSessionRepository) {
    sessions.expect_create().returning(|new| {
        Ok(SessionLog {
            id: Uuid::new_v4(),
            mentor_id: new.mentor_id,
            mentee_id: new.mentee_id,
            mentor_name: new.mentor_name,
            mentee_name: new.mentee_name,
            topic: new.topic,
            session_date: new.session_date,
            duration_minutes: new.duration_minutes,
            notes: new.notes,
            status: new.status,
        })
    });
}

#[tokio::test]
async fn test_schedule_session_creates_scheduled_row_with_snapshots() {
    let mentor_id = Uuid::new_v4();
    let mentee_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .with(eq(mentor_id))
        .returning(move |id| Ok(Some(test_user(id, "Eleanor Vance", UserRole::Mentor))));
    users
        .expect_find_by_id()
        .with(eq(mentee_id))
        .returning(move |id| Ok(Some(test_user(id, "Alex Johnson", UserRole::Mentee))));

    let mut sessions = MockSessionRepository::new();
    echo_created(&mut sessions);

    let service = SessionManager::new(Arc::new(TestStore::new(users, sessions)));
    let when = Utc::now() + Duration::days(2);
    let created = service
        .schedule_session(mentor_id, mentee_id, "Resume review".to_string(), when, Some(45))
        .await
        .unwrap();

    assert_eq!(created.status, SessionStatus::Scheduled);
    assert_eq!(created.topic, "Resume review");
    assert_eq!(created.mentor_name, "Eleanor Vance");
    assert_eq!(created.mentee_name, "Alex Johnson");
    assert_eq!(created.duration_minutes, Some(45));
}

#[tokio::test]
async fn test_schedule_with_empty_topic_fails_before_any_store_call() {
    // Untouched mocks panic on any call, so reaching the store fails the test
    let store = TestStore::new(MockUserRepository::new(), MockSessionRepository::new());
    let service = SessionManager::new(Arc::new(store));

    let result = service
        .schedule_session(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "   ".to_string(),
            Utc::now(),
            None,
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_schedule_falls_back_to_placeholder_names() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().returning(|_| Ok(None));

    let mut sessions = MockSessionRepository::new();
    echo_created(&mut sessions);

    let service = SessionManager::new(Arc::new(TestStore::new(users, sessions)));
    let created = service
        .schedule_session(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Kickoff".to_string(),
            Utc::now(),
            None,
        )
        .await
        .unwrap();

    assert_eq!(created.mentor_name, "N/A");
    assert_eq!(created.mentee_name, "N/A");
}

#[tokio::test]
async fn test_add_note_is_logged_as_completed_mentor_note() {
    let mentor_id = Uuid::new_v4();
    let mentee_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .returning(move |id| Ok(Some(test_user(id, "Someone", UserRole::Mentor))));

    let mut sessions = MockSessionRepository::new();
    sessions
        .expect_create()
        .withf(|new| {
            new.topic == "Mentor Note"
                && new.status == SessionStatus::Completed
                && new.notes.as_deref() == Some("Great progress on the project")
                && new.duration_minutes.is_none()
        })
        .returning(|new| {
            Ok(SessionLog {
                id: Uuid::new_v4(),
                mentor_id: new.mentor_id,
                mentee_id: new.mentee_id,
                mentor_name: new.mentor_name,
                mentee_name: new.mentee_name,
                topic: new.topic,
                session_date: new.session_date,
                duration_minutes: new.duration_minutes,
                notes: new.notes,
                status: new.status,
            })
        });

    let service = SessionManager::new(Arc::new(TestStore::new(users, sessions)));
    let created = service
        .add_note(
            mentor_id,
            mentee_id,
            "Great progress on the project".to_string(),
        )
        .await
        .unwrap();

    assert_eq!(created.topic, "Mentor Note");
    assert_eq!(created.status, SessionStatus::Completed);
}

#[tokio::test]
async fn test_partition_scenario_one_assignment_three_sessions() {
    // Mentee with one future scheduled, one completed a week ago, and
    // one scheduled-but-elapsed session
    let mentor_id = Uuid::new_v4();
    let mentee_id = Uuid::new_v4();
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();

    let future = test_session(
        mentor_id,
        mentee_id,
        SessionStatus::Scheduled,
        now + Duration::days(1),
    );
    let completed = test_session(
        mentor_id,
        mentee_id,
        SessionStatus::Completed,
        now - Duration::days(7),
    );
    let elapsed = test_session(
        mentor_id,
        mentee_id,
        SessionStatus::Scheduled,
        now - Duration::days(1),
    );

    let future_id = future.id;
    let elapsed_id = elapsed.id;
    let completed_id = completed.id;

    let mut sessions = MockSessionRepository::new();
    let rows = vec![future, completed, elapsed];
    sessions
        .expect_list_by_mentee()
        .with(eq(mentee_id))
        .returning(move |_| Ok(rows.clone()));

    let service = SessionManager::new(Arc::new(TestStore::new(
        MockUserRepository::new(),
        sessions,
    )));
    let parts = service
        .partitioned_for(UserRole::Mentee, mentee_id, now)
        .await
        .unwrap();

    assert_eq!(
        parts.upcoming.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![future_id]
    );
    assert_eq!(
        parts.past.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![elapsed_id, completed_id]
    );
}

#[tokio::test]
async fn test_feedback_with_no_rating_and_no_text_fails_validation() {
    let store = TestStore::new(MockUserRepository::new(), MockSessionRepository::new());
    let service = SessionManager::new(Arc::new(store));

    let result = service
        .submit_feedback(Uuid::new_v4(), Some(0), Some("".to_string()))
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_valid_feedback_is_acknowledged_without_a_store_write() {
    // No session repository expectations: a write attempt would panic
    let store = TestStore::new(MockUserRepository::new(), MockSessionRepository::new());
    let service = SessionManager::new(Arc::new(store));

    let result = service
        .submit_feedback(Uuid::new_v4(), Some(5), None)
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_text_only_feedback_is_accepted() {
    let store = TestStore::new(MockUserRepository::new(), MockSessionRepository::new());
    let service = SessionManager::new(Arc::new(store));

    let result = service
        .submit_feedback(Uuid::new_v4(), None, Some("Very helpful session".to_string()))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_deleting_assignment_does_not_cascade_to_sessions() {
    let mentor_id = Uuid::new_v4();
    let mentee_id = Uuid::new_v4();
    let assignment_id = Uuid::new_v4();

    let mut assignments = MockAssignmentRepository::new();
    assignments
        .expect_delete()
        .with(eq(assignment_id))
        .returning(|_| Ok(()));

    let mut sessions = MockSessionRepository::new();
    let rows = vec![test_session(
        mentor_id,
        mentee_id,
        SessionStatus::Completed,
        Utc::now() - Duration::days(3),
    )];
    sessions
        .expect_list_by_mentor()
        .with(eq(mentor_id))
        .returning(move |_| Ok(rows.clone()));

    let store = Arc::new(
        TestStore::new(MockUserRepository::new(), sessions).with_assignments(assignments),
    );

    AssignmentManager::new(store.clone())
        .delete_assignment(assignment_id)
        .await
        .unwrap();

    // Prior sessions for the pair remain visible after the deletion
    let remaining = SessionManager::new(store)
        .sessions_for(UserRole::Mentor, mentor_id)
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
}
