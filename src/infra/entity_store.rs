//! Entity store access: one accessor bundling the per-collection
//! repositories.
//!
//! The backing store contract is non-transactional, so there is no
//! cross-repository transaction support here; multi-step operations
//! (such as the duplicate-assignment check) are read-then-write by
//! construction.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{
    AssignmentRepository, AssignmentStore, InterestRepository, InterestStore, SessionRepository,
    SessionStore, UserRepository, UserStore,
};

/// Entity store trait for dependency injection.
///
/// Provides centralized access to all collection repositories.
pub trait EntityStore: Send + Sync {
    /// Users collection
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Mentorship assignments collection
    fn assignments(&self) -> Arc<dyn AssignmentRepository>;

    /// Session logs collection
    fn sessions(&self) -> Arc<dyn SessionRepository>;

    /// Interest requests collection
    fn interests(&self) -> Arc<dyn InterestRepository>;
}

/// Concrete implementation of EntityStore over a shared connection
pub struct Persistence {
    users: Arc<UserStore>,
    assignments: Arc<AssignmentStore>,
    sessions: Arc<SessionStore>,
    interests: Arc<InterestStore>,
}

impl Persistence {
    /// Create new entity store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: Arc::new(UserStore::new(db.clone())),
            assignments: Arc::new(AssignmentStore::new(db.clone())),
            sessions: Arc::new(SessionStore::new(db.clone())),
            interests: Arc::new(InterestStore::new(db)),
        }
    }
}

impl EntityStore for Persistence {
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
