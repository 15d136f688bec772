//! Mentor browsing handlers: the pool mentees explore, plus interest
//! requests.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_role, CurrentUser};
use crate::api::AppState;
use crate::domain::{InterestRequest, UserResponse, UserRole};
use crate::errors::AppResult;
use crate::types::Created;

/// Interest request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ExpressInterestRequest {
    /// Message to the mentor
    #[validate(length(
        min = 10,
        max = 500,
        message = "Message must be between 10 and 500 characters"
    ))]
    #[schema(example = "Hi, I'm interested in learning more about your mentorship.")]
    pub message: String,
}

/// Create mentor browsing routes
pub fn mentor_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_mentors))
        .route("/:id", get(get_mentor))
        .route("/:id/interest", post(express_interest))
}

/// Browse the pool of active mentors
#[utoipa::path(
    get,
    path = "/mentors",
    tag = "Mentors",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active mentors", body = Vec<UserResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_mentors(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let mentors = state.user_service.list_active_mentors().await?;
    Ok(Json(mentors.into_iter().map(UserResponse::from).collect()))
}

/// A single mentor profile from the browsable pool
#[utoipa::path(
    get,
    path = "/mentors/{id}",
    tag = "Mentors",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Mentor user ID")
    ),
    responses(
        (status = 200, description = "Mentor profile", body = UserResponse),
        (status = 404, description = "Not a browsable mentor")
    )
)]
pub async fn get_mentor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserResponse>> {
    let mentor = state.user_service.get_active_mentor(id).await?;
    Ok(Json(UserResponse::from(mentor)))
}

/// Express interest in a mentor (mentee only)
#[utoipa::path(
    post,
    path = "/mentors/{id}/interest",
    tag = "Mentors",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Mentor user ID")
    ),
    request_body = ExpressInterestRequest,
    responses(
        (status = 201, description = "Interest recorded", body = InterestRequest),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - Mentee only")
    )
)]
pub async fn express_interest(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(mentor_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<ExpressInterestRequest>,
) -> AppResult<Created<InterestRequest>> {
    require_role(&current_user, UserRole::Mentee)?;

    // Snapshot fields come from the caller's stored record
    let mentee = state.user_service.get_user(current_user.id).await?;

    let request = state
        .interest_service
        .express_interest(&mentee, mentor_id, payload.message)
        .await?;

    Ok(Created(request))
}
