//! Interest request entity: a mentee's message to a mentor asking for
//! mentorship, held for review until an admin creates the pairing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A mentee's expression of interest in a mentor.
///
/// Requests carry name/email snapshots like assignments do, and are
/// created with status `pending`. There is no accept/decline transition;
/// pairing happens through admin-created assignments.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InterestRequest {
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub mentor_name: String,
    pub mentee_id: Uuid,
    pub mentee_name: String,
    pub mentee_email: String,
    pub message: String,
    #[schema(example = "pending")]
    pub status: String,
    pub requested_at: DateTime<Utc>,
}
