//! Dashboard handlers: one aggregated view per role.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::get,
    Router,
};
use chrono::Utc;

use crate::api::middleware::{require_admin, require_role, CurrentUser};
use crate::api::AppState;
use crate::domain::UserRole;
use crate::errors::AppResult;
use crate::services::{AdminDashboard, MenteeDashboard, MentorDashboard};

/// Create dashboard routes
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin_dashboard))
        .route("/mentor", get(mentor_dashboard))
        .route("/mentee", get(mentee_dashboard))
}

/// Admin overview: stats, roster, assignments, session logs
#[utoipa::path(
    get,
    path = "/dashboard/admin",
    tag = "Dashboards",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Admin dashboard", body = AdminDashboard),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn admin_dashboard(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<AdminDashboard>> {
    require_admin(&current_user)?;

    let dashboard = state.dashboard_service.admin_dashboard().await?;
    Ok(Json(dashboard))
}

/// Mentor view: active mentees, pending requests, sessions
#[utoipa::path(
    get,
    path = "/dashboard/mentor",
    tag = "Dashboards",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Mentor dashboard", body = MentorDashboard),
        (status = 403, description = "Forbidden - Mentor only")
    )
)]
pub async fn mentor_dashboard(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<MentorDashboard>> {
    require_role(&current_user, UserRole::Mentor)?;

    let dashboard = state
        .dashboard_service
        .mentor_dashboard(current_user.id, Utc::now())
        .await?;
    Ok(Json(dashboard))
}

/// Mentee view: current mentor, sessions, suggested mentors
#[utoipa::path(
    get,
    path = "/dashboard/mentee",
    tag = "Dashboards",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Mentee dashboard", body = MenteeDashboard),
        (status = 403, description = "Forbidden - Mentee only")
    )
)]
pub async fn mentee_dashboard(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<MenteeDashboard>> {
    require_role(&current_user, UserRole::Mentee)?;

    let dashboard = state
        .dashboard_service
        .mentee_dashboard(current_user.id, Utc::now())
        .await?;
    Ok(Json(dashboard))
}
