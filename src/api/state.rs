//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and
//! infrastructure. Handlers receive this by injection; there is no
//! ambient global service state anywhere.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{
    AssignmentService, AuthService, DashboardService, InterestService, ServiceContainer,
    Services, SessionService, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Assignment service
    pub assignment_service: Arc<dyn AssignmentService>,
    /// Session service
    pub session_service: Arc<dyn SessionService>,
    /// Interest service
    pub interest_service: Arc<dyn InterestService>,
    /// Dashboard service
    pub dashboard_service: Arc<dyn DashboardService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a database connection and config.
    pub fn from_config(database: Arc<Database>, config: crate::config::Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);

        Self {
            auth_service: container.auth(),
            user_service: container.users(),
            assignment_service: container.assignments(),
            session_service: container.sessions(),
            interest_service: container.interests(),
            dashboard_service: container.dashboards(),
            database,
        }
    }
}
