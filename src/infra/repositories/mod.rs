//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over the entity store, one per
//! collection, exposing only the operations the store contract offers:
//! insert-with-generated-ID, point lookups, equality-filtered scans,
//! partial updates, and delete-by-ID. No transactions, no joins.

mod assignment_repository;
pub(crate) mod entities;
mod interest_repository;
mod session_repository;
mod user_repository;

pub use assignment_repository::{AssignmentRepository, AssignmentStore};
pub use interest_repository::{InterestRepository, InterestStore, NewInterestRequest};
pub use session_repository::{NewSessionLog, SessionRepository, SessionStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use assignment_repository::MockAssignmentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use interest_repository::MockInterestRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use session_repository::MockSessionRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
