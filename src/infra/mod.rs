//! Infrastructure layer - External systems integration
//!
//! This module handles the external collaborators of the application:
//! the entity store (database connection, repositories, migrations).
//! Identity lives in the services layer; there is no cache, queue, or
//! background machinery here.

pub mod db;
pub mod entity_store;
pub mod repositories;

pub use db::{Database, Migrator};
pub use entity_store::{EntityStore, Persistence};
pub use repositories::{
    AssignmentRepository, InterestRepository, NewInterestRequest, NewSessionLog,
    SessionRepository, UserRepository,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockAssignmentRepository, MockInterestRepository, MockSessionRepository, MockUserRepository,
};
