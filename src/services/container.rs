//! Service container - centralized service access with parallel
//! execution support.
//!
//! The container wires every service over one shared entity store and
//! hands out trait objects, so handlers depend on abstractions and
//! tests can swap in mocks.

use std::future::Future;
use std::sync::Arc;

use super::{
    AssignmentManager, AssignmentService, Authenticator, AuthService, DashboardBuilder,
    DashboardService, InterestManager, InterestService, SessionManager, SessionService,
    UserManager, UserService,
};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get assignment service
    fn assignments(&self) -> Arc<dyn AssignmentService>;

    /// Get session service
    fn sessions(&self) -> Arc<dyn SessionService>;

    /// Get interest service
    fn interests(&self) -> Arc<dyn InterestService>;

    /// Get dashboard service
    fn dashboards(&self) -> Arc<dyn DashboardService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    assignment_service: Arc<dyn AssignmentService>,
    session_service: Arc<dyn SessionService>,
    interest_service: Arc<dyn InterestService>,
    dashboard_service: Arc<dyn DashboardService>,
}

impl Services {
    /// Create service container from a database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let store = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(store.clone(), config)),
            user_service: Arc::new(UserManager::new(store.clone())),
            assignment_service: Arc::new(AssignmentManager::new(store.clone())),
            session_service: Arc::new(SessionManager::new(store.clone())),
            interest_service: Arc::new(InterestManager::new(store.clone())),
            dashboard_service: Arc::new(DashboardBuilder::new(store)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn assignments(&self) -> Arc<dyn AssignmentService> {
        self.assignment_service.clone()
    }

    fn sessions(&self) -> Arc<dyn SessionService> {
        self.session_service.clone()
    }

    fn interests(&self) -> Arc<dyn InterestService> {
        self.interest_service.clone()
    }

    fn dashboards(&self) -> Arc<dyn DashboardService> {
        self.dashboard_service.clone()
    }
}

/// Parallel execution utilities for running independent operations
/// concurrently.
///
/// Dashboard aggregation issues its mount-time reads through these:
/// every query runs concurrently and the join is all-or-nothing, so a
/// single failure surfaces one error and no partial view.
pub mod parallel {
    use super::*;
    use tokio::try_join;

    /// Execute two independent async operations in parallel.
    ///
    /// Both operations run concurrently and the function returns when
    /// both complete. If either operation fails, the error is returned
    /// immediately.
    pub async fn join2<F1, F2, T1, T2>(f1: F1, f2: F2) -> AppResult<(T1, T2)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
    {
        try_join!(f1, f2)
    }

    /// Execute three independent async operations in parallel.
    pub async fn join3<F1, F2, F3, T1, T2, T3>(f1: F1, f2: F2, f3: F3) -> AppResult<(T1, T2, T3)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
        F3: Future<Output = AppResult<T3>>,
    {
        try_join!(f1, f2, f3)
    }

    /// Execute a collection of homogeneous async operations in parallel.
    ///
    /// All operations must return the same type. Results are returned in
    /// the same order as the input futures.
    pub async fn join_all<F, T>(futures: Vec<F>) -> AppResult<Vec<T>>
    where
        F: Future<Output = AppResult<T>>,
    {
        let results = futures::future::join_all(futures).await;
        results.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_parallel_join2() {
        async fn op1() -> AppResult<i32> {
            Ok(1)
        }
        async fn op2() -> AppResult<i32> {
            Ok(2)
        }

        let (a, b) = parallel::join2(op1(), op2()).await.unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[tokio::test]
    async fn test_parallel_join_all() {
        let futures: Vec<_> = (0..5)
            .map(|i| async move { Ok(i) as AppResult<i32> })
            .collect();
        let results = parallel::join_all(futures).await.unwrap();
        assert_eq!(results, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_parallel_join_fails_whole_batch() {
        use crate::errors::AppError;

        async fn ok_op() -> AppResult<i32> {
            Ok(1)
        }
        async fn failing_op() -> AppResult<i32> {
            Err(AppError::internal("boom"))
        }

        let result = parallel::join2(ok_op(), failing_op()).await;
        assert!(result.is_err());
    }
}
