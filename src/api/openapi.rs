//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    assignment_handler, auth_handler, dashboard_handler, mentor_handler, session_handler,
    user_handler,
};
use crate::domain::{InterestRequest, UserResponse, UserRole};
use crate::services::{
    AdminDashboard, AssignmentView, MenteeDashboard, MenteePairing, MentorDashboard,
    MentorPairing, PlatformStats, SessionLists, SessionView, TokenResponse,
};

/// OpenAPI documentation for MentorLink
#[derive(OpenApi)]
#[openapi(
    info(
        title = "MentorLink",
        version = "0.1.0",
        description = "Mentorship-matching platform: mentor browsing, admin-managed pairings, session tracking",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // User endpoints
        user_handler::get_current_user,
        user_handler::list_users,
        user_handler::create_user,
        user_handler::update_profile,
        user_handler::update_role,
        user_handler::toggle_active,
        // Mentor browsing endpoints
        mentor_handler::list_mentors,
        mentor_handler::get_mentor,
        mentor_handler::express_interest,
        // Assignment endpoints
        assignment_handler::list_assignments,
        assignment_handler::my_assignments,
        assignment_handler::create_assignment,
        assignment_handler::delete_assignment,
        // Session endpoints
        session_handler::schedule_session,
        session_handler::add_note,
        session_handler::my_sessions,
        session_handler::submit_feedback,
        // Dashboard endpoints
        dashboard_handler::admin_dashboard,
        dashboard_handler::mentor_dashboard,
        dashboard_handler::mentee_dashboard,
    ),
    components(
        schemas(
            // Domain types
            UserRole,
            UserResponse,
            InterestRequest,
            // Auth types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            TokenResponse,
            // User handler types
            user_handler::UpdateProfileRequest,
            user_handler::CreateUserRequest,
            user_handler::UpdateRoleRequest,
            // Mentor handler types
            mentor_handler::ExpressInterestRequest,
            // Assignment handler types
            assignment_handler::CreateAssignmentRequest,
            assignment_handler::AssignmentResponse,
            assignment_handler::MyAssignment,
            // Session handler types
            session_handler::ScheduleSessionRequest,
            session_handler::AddNoteRequest,
            session_handler::SubmitFeedbackRequest,
            session_handler::SessionResponse,
            // Dashboard view models
            AdminDashboard,
            MentorDashboard,
            MenteeDashboard,
            PlatformStats,
            AssignmentView,
            SessionView,
            SessionLists,
            MenteePairing,
            MentorPairing,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Account creation and sign-in"),
        (name = "Users", description = "Profiles and admin account management"),
        (name = "Mentors", description = "Mentor browsing and interest requests"),
        (name = "Assignments", description = "Admin-managed mentor-mentee pairings"),
        (name = "Sessions", description = "Session scheduling, notes, and feedback"),
        (name = "Dashboards", description = "Per-role aggregated views")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
