//! Session log entity and the temporal partitioning over it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Session lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl SessionStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "scheduled" => Some(SessionStatus::Scheduled),
            "completed" => Some(SessionStatus::Completed),
            "cancelled" => Some(SessionStatus::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Scheduled => "scheduled",
            SessionStatus::Completed => "completed",
            SessionStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scheduled or completed mentorship meeting, or a mentor's freeform
/// note (recorded as a completed session with a fixed topic sentinel).
///
/// Names are snapshots taken at write time; they keep rows renderable
/// when the referenced user records are gone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionLog {
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub mentee_id: Uuid,
    pub mentor_name: String,
    pub mentee_name: String,
    pub topic: String,
    pub session_date: DateTime<Utc>,
    pub duration_minutes: Option<i32>,
    pub notes: Option<String>,
    pub status: SessionStatus,
}

/// Sessions split into the two dashboard lists.
#[derive(Debug, Clone, Default)]
pub struct SessionPartition {
    pub upcoming: Vec<SessionLog>,
    pub past: Vec<SessionLog>,
}

/// Partition sessions into upcoming and past relative to `now`.
///
/// - upcoming: scheduled with a date at or after `now`
/// - past: completed, or scheduled but elapsed
/// - cancelled: appears in neither list. A cancelled session with a
///   future date therefore vanishes from both views; this mirrors the
///   shipped dashboards and is pinned by tests below.
///
/// Both lists are ordered by `session_date` descending, including
/// upcoming, so the upcoming list leads with the furthest-out session
/// rather than the soonest. Callers render the order as given.
///
/// Pure function: no I/O, deterministic for a fixed `now`.
pub fn partition_sessions(sessions: Vec<SessionLog>, now: DateTime<Utc>) -> SessionPartition {
    let mut upcoming = Vec::new();
    let mut past = Vec::new();

    for session in sessions {
        match session.status {
            SessionStatus::Scheduled if session.session_date >= now => upcoming.push(session),
            SessionStatus::Scheduled => past.push(session),
            SessionStatus::Completed => past.push(session),
            SessionStatus::Cancelled => {}
        }
    }

    upcoming.sort_by(|a, b| b.session_date.cmp(&a.session_date));
    past.sort_by(|a, b| b.session_date.cmp(&a.session_date));

    SessionPartition { upcoming, past }
}
