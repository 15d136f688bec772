//! User handlers: profiles, the admin roster, and account mutations.

use axum::{
    extract::{Extension, Path, Query, State},
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_admin, CurrentUser};
use crate::api::AppState;
use crate::domain::{ListInput, ProfileUpdate, UserResponse, UserRole};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, Paginated, PaginationParams};

/// Profile update request.
///
/// `skills` and `interests` accept either a JSON array or a single
/// comma-separated string (the web form submits the latter); both are
/// normalized to lists before anything is persisted.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    /// Short introduction
    #[validate(length(max = 500, message = "Bio must not exceed 500 characters"))]
    pub bio: Option<String>,
    /// Skills, as a list or comma-separated string
    pub skills: Option<ListInput>,
    /// Interests, as a list or comma-separated string
    pub interests: Option<ListInput>,
    /// Freeform availability description
    #[schema(example = "Weekends, Tuesday evenings")]
    pub availability: Option<String>,
    /// Avatar URL
    #[validate(url(message = "Profile picture must be a valid URL"))]
    pub profile_picture_url: Option<String>,
}

/// Admin account creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Sarah Lee")]
    pub name: String,
    /// Email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "sarah.lee@example.com")]
    pub email: String,
    /// Role: "mentor" or "mentee"
    #[schema(example = "mentee")]
    pub role: String,
}

/// Admin role change request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRoleRequest {
    /// New role value
    #[schema(example = "mentor")]
    pub role: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/me", get(get_current_user))
        .route("/me/profile", put(update_profile))
        .route("/:id/role", put(update_role))
        .route("/:id/toggle-active", post(toggle_active))
}

/// Get current authenticated user's profile
#[utoipa::path(
    get,
    path = "/users/me",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user profile", body = UserResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_current_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(current_user.id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// List all users including deactivated accounts (admin only)
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<u64>, Query, description = "1-indexed page number"),
        ("per_page" = Option<u64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Paginated user roster"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list_users(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<Paginated<UserResponse>>> {
    require_admin(&current_user)?;

    let users = state.user_service.list_users().await?;
    let total = users.len() as u64;
    let page: Vec<UserResponse> = users
        .into_iter()
        .skip(pagination.offset() as usize)
        .take(pagination.limit() as usize)
        .map(UserResponse::from)
        .collect();

    Ok(Json(Paginated::new(
        page,
        pagination.page,
        pagination.limit(),
        total,
    )))
}

/// Create a mentor or mentee account (admin only)
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created<UserResponse>> {
    require_admin(&current_user)?;

    let role = UserRole::parse(&payload.role)
        .filter(UserRole::is_registrable)
        .ok_or_else(|| AppError::validation("Role must be either 'mentor' or 'mentee'"))?;

    let user = state
        .user_service
        .create_user(payload.name, payload.email, role)
        .await?;

    Ok(Created(UserResponse::from(user)))
}

/// Update the caller's own profile
#[utoipa::path(
    put,
    path = "/users/me/profile",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn update_profile(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> AppResult<Json<UserResponse>> {
    let update = ProfileUpdate {
        bio: payload.bio,
        skills: payload.skills.map(ListInput::into_items),
        interests: payload.interests.map(ListInput::into_items),
        availability: payload.availability,
        profile_picture_url: payload.profile_picture_url,
    };

    let user = state
        .user_service
        .update_profile(current_user.id, update)
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// Change a user's role (admin only)
#[utoipa::path(
    put,
    path = "/users/{id}/role",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Role updated", body = UserResponse),
        (status = 400, description = "Invalid role"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_role(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateRoleRequest>,
) -> AppResult<Json<UserResponse>> {
    require_admin(&current_user)?;

    let role = UserRole::parse(&payload.role).ok_or_else(|| {
        AppError::validation("Invalid role. Must be 'mentor', 'mentee' or 'admin'")
    })?;

    let user = state.user_service.update_role(id, role).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Flip a user's activity flag (admin only)
#[utoipa::path(
    post,
    path = "/users/{id}/toggle-active",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Activity flag flipped", body = UserResponse),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "User not found")
    )
)]
pub async fn toggle_active(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserResponse>> {
    require_admin(&current_user)?;

    let user = state.user_service.toggle_active(id).await?;
    Ok(Json(UserResponse::from(user)))
}
