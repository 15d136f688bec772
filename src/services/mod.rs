//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, with repository access centralized behind the
//! entity store.
//!
//! Every mutation follows the same pattern: validate locally, issue a
//! single store write, surface success or the store's error once; no
//! automatic retries.

mod assignment_service;
mod auth_service;
pub mod container;
mod dashboard_service;
mod interest_service;
mod session_service;
mod user_service;

// Service Container
pub use container::{parallel, ServiceContainer, Services};

// Service traits and implementations
pub use assignment_service::{AssignmentManager, AssignmentService};
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use dashboard_service::{
    AdminDashboard, AssignmentView, DashboardBuilder, DashboardService, MenteeDashboard,
    MenteePairing, MentorDashboard, MentorPairing, PlatformStats, SessionLists, SessionView,
};
pub use interest_service::{InterestManager, InterestService};
pub use session_service::{SessionManager, SessionService};
pub use user_service::{UserManager, UserService};
