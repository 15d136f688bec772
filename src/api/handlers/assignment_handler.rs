//! Assignment handlers: admin-managed mentor-mentee pairings.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::{delete, get},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_admin, CurrentUser};
use crate::api::AppState;
use crate::domain::{MentorshipAssignment, UserResponse, UserRole};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// New pairing request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAssignmentRequest {
    /// Mentor user ID
    pub mentor_id: Uuid,
    /// Mentee user ID
    pub mentee_id: Uuid,
}

/// Assignment response payload
#[derive(Debug, Serialize, ToSchema)]
pub struct AssignmentResponse {
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub mentee_id: Uuid,
    pub mentor_name: String,
    pub mentee_name: String,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub status: String,
}

impl From<MentorshipAssignment> for AssignmentResponse {
    fn from(a: MentorshipAssignment) -> Self {
        Self {
            id: a.id,
            mentor_id: a.mentor_id,
            mentee_id: a.mentee_id,
            mentor_name: a.mentor_name,
            mentee_name: a.mentee_name,
            start_date: a.start_date,
            status: a.status.to_string(),
        }
    }
}

/// The caller's active pairing with the other side resolved.
///
/// `counterpart` is absent when the referenced user no longer resolves;
/// the name snapshots on the assignment remain renderable.
#[derive(Debug, Serialize, ToSchema)]
pub struct MyAssignment {
    #[serde(flatten)]
    pub assignment: AssignmentResponse,
    pub counterpart: Option<UserResponse>,
}

/// Create assignment routes
pub fn assignment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_assignments).post(create_assignment))
        .route("/mine", get(my_assignments))
        .route("/:id", delete(delete_assignment))
}

/// The caller's active pairings (mentor: 0..N, mentee: 0 or 1)
#[utoipa::path(
    get,
    path = "/assignments/mine",
    tag = "Assignments",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active pairings with counterparts", body = Vec<MyAssignment>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn my_assignments(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MyAssignment>>> {
    let assignments = match current_user.role {
        UserRole::Mentor => {
            state
                .assignment_service
                .active_for_mentor(current_user.id)
                .await?
        }
        UserRole::Mentee | UserRole::Admin => {
            state
                .assignment_service
                .active_for_mentee(current_user.id)
                .await?
        }
    };

    let mut result = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        let counterpart = state
            .assignment_service
            .counterpart(&assignment, current_user.id)
            .await;
        result.push(MyAssignment {
            assignment: AssignmentResponse::from(assignment),
            counterpart: counterpart.map(UserResponse::from),
        });
    }

    Ok(Json(result))
}

/// List every assignment (admin only)
#[utoipa::path(
    get,
    path = "/assignments",
    tag = "Assignments",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All assignments", body = Vec<AssignmentResponse>),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list_assignments(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AssignmentResponse>>> {
    require_admin(&current_user)?;

    let assignments = state.assignment_service.list_assignments().await?;
    Ok(Json(
        assignments.into_iter().map(AssignmentResponse::from).collect(),
    ))
}

/// Pair a mentor with a mentee (admin only)
#[utoipa::path(
    post,
    path = "/assignments",
    tag = "Assignments",
    security(("bearer_auth" = [])),
    request_body = CreateAssignmentRequest,
    responses(
        (status = 201, description = "Pairing created", body = AssignmentResponse),
        (status = 400, description = "Validation error (self-pairing, missing or unmatchable user)"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 409, description = "Active assignment for this pair already exists")
    )
)]
pub async fn create_assignment(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAssignmentRequest>,
) -> AppResult<Created<AssignmentResponse>> {
    require_admin(&current_user)?;

    let assignment = state
        .assignment_service
        .create_assignment(payload.mentor_id, payload.mentee_id)
        .await?;

    Ok(Created(AssignmentResponse::from(assignment)))
}

/// Delete a pairing (admin only; irreversible, does not touch session logs)
#[utoipa::path(
    delete,
    path = "/assignments/{id}",
    tag = "Assignments",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Assignment ID")
    ),
    responses(
        (status = 204, description = "Pairing deleted"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Assignment not found")
    )
)]
pub async fn delete_assignment(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    require_admin(&current_user)?;

    state.assignment_service.delete_assignment(id).await?;
    Ok(NoContent)
}
