//! Session handlers: scheduling, mentor notes, the caller's session
//! lists, and mentee feedback.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_role, CurrentUser};
use crate::api::AppState;
use crate::domain::{SessionLog, UserRole};
use crate::errors::AppResult;
use crate::services::{SessionLists, SessionView};
use crate::types::{ApiResponse, Created};

/// Session scheduling request (mentor is the caller)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ScheduleSessionRequest {
    /// Mentee user ID
    pub mentee_id: Uuid,
    /// Session topic
    #[validate(length(min = 1, message = "Topic is required"))]
    #[schema(example = "Discuss project outline")]
    pub topic: String,
    /// Scheduled point in time
    pub session_date: DateTime<Utc>,
    /// Planned duration, if known
    #[schema(example = 60)]
    pub duration_minutes: Option<i32>,
}

/// Mentor note request (logged as a completed session)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddNoteRequest {
    /// Mentee user ID
    pub mentee_id: Uuid,
    /// Note text
    #[validate(length(min = 1, message = "Note text is required"))]
    pub text: String,
}

/// Mentee feedback request; a rating, text, or both
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitFeedbackRequest {
    /// Rating from 1 to 5
    #[schema(example = 5)]
    pub rating: Option<u8>,
    /// Freeform feedback
    pub text: Option<String>,
}

/// Session response payload
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub mentee_id: Uuid,
    pub mentor_name: String,
    pub mentee_name: String,
    pub topic: String,
    pub session_date: DateTime<Utc>,
    pub duration_minutes: Option<i32>,
    pub notes: Option<String>,
    pub status: String,
}

impl From<SessionLog> for SessionResponse {
    fn from(s: SessionLog) -> Self {
        Self {
            id: s.id,
            mentor_id: s.mentor_id,
            mentee_id: s.mentee_id,
            mentor_name: s.mentor_name,
            mentee_name: s.mentee_name,
            topic: s.topic,
            session_date: s.session_date,
            duration_minutes: s.duration_minutes,
            notes: s.notes,
            status: s.status.to_string(),
        }
    }
}

/// Create session routes
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(schedule_session))
        .route("/notes", post(add_note))
        .route("/mine", get(my_sessions))
        .route("/:id/feedback", post(submit_feedback))
}

/// Schedule a session with a mentee (mentor only)
#[utoipa::path(
    post,
    path = "/sessions",
    tag = "Sessions",
    security(("bearer_auth" = [])),
    request_body = ScheduleSessionRequest,
    responses(
        (status = 201, description = "Session scheduled", body = SessionResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - Mentor only")
    )
)]
pub async fn schedule_session(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ScheduleSessionRequest>,
) -> AppResult<Created<SessionResponse>> {
    require_role(&current_user, UserRole::Mentor)?;

    let session = state
        .session_service
        .schedule_session(
            current_user.id,
            payload.mentee_id,
            payload.topic,
            payload.session_date,
            payload.duration_minutes,
        )
        .await?;

    Ok(Created(SessionResponse::from(session)))
}

/// Record a freeform note against a mentee (mentor only)
#[utoipa::path(
    post,
    path = "/sessions/notes",
    tag = "Sessions",
    security(("bearer_auth" = [])),
    request_body = AddNoteRequest,
    responses(
        (status = 201, description = "Note recorded", body = SessionResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - Mentor only")
    )
)]
pub async fn add_note(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AddNoteRequest>,
) -> AppResult<Created<SessionResponse>> {
    require_role(&current_user, UserRole::Mentor)?;

    let session = state
        .session_service
        .add_note(current_user.id, payload.mentee_id, payload.text)
        .await?;

    Ok(Created(SessionResponse::from(session)))
}

/// The caller's sessions, split into upcoming and past
#[utoipa::path(
    get,
    path = "/sessions/mine",
    tag = "Sessions",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Upcoming and past sessions", body = SessionLists),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn my_sessions(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<SessionLists>> {
    let parts = state
        .session_service
        .partitioned_for(current_user.role, current_user.id, Utc::now())
        .await?;

    Ok(Json(SessionLists {
        upcoming: parts.upcoming.into_iter().map(SessionView::from).collect(),
        past: parts.past.into_iter().map(SessionView::from).collect(),
    }))
}

/// Submit feedback on a session (mentee only)
#[utoipa::path(
    post,
    path = "/sessions/{id}/feedback",
    tag = "Sessions",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    request_body = SubmitFeedbackRequest,
    responses(
        (status = 200, description = "Feedback acknowledged"),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - Mentee only")
    )
)]
pub async fn submit_feedback(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<SubmitFeedbackRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    require_role(&current_user, UserRole::Mentee)?;

    state
        .session_service
        .submit_feedback(session_id, payload.rating, payload.text)
        .await?;

    Ok(Json(ApiResponse::message("Feedback submitted. Thank you!")))
}
