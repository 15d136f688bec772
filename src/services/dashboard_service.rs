//! Dashboard service - per-role aggregated views.
//!
//! Each role gets its own view-model type built by its own method, so
//! role behavior lives in a closed set of variants instead of
//! conditional trees. Mount-time reads are issued as a batch of
//! independent queries joined all-or-nothing: if any one fails, the
//! whole view fails with a single error and nothing partial is
//! rendered.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use super::container::parallel;
use crate::config::UNKNOWN_USER_NAME;
use crate::domain::{
    partition_sessions, AssignmentStatus, InterestRequest, MentorshipAssignment, SessionLog,
    SessionStatus, User, UserResponse, UserRole,
};
use crate::errors::{AppError, AppResult};
use crate::infra::EntityStore;

/// Assignment row with display names resolved for rendering.
///
/// Resolution order: live user record, then the creation-time snapshot,
/// then the "N/A" placeholder.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssignmentView {
    pub id: Uuid,
    pub mentor_name: String,
    pub mentee_name: String,
    pub start_date: DateTime<Utc>,
    pub status: AssignmentStatus,
}

/// Session row shaped for rendering.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionView {
    pub id: Uuid,
    pub mentor_name: String,
    pub mentee_name: String,
    pub topic: String,
    pub session_date: DateTime<Utc>,
    pub duration_minutes: Option<i32>,
    pub notes: Option<String>,
    pub status: SessionStatus,
}

impl From<SessionLog> for SessionView {
    fn from(s: SessionLog) -> Self {
        Self {
            id: s.id,
            mentor_name: s.mentor_name,
            mentee_name: s.mentee_name,
            topic: s.topic,
            session_date: s.session_date,
            duration_minutes: s.duration_minutes,
            notes: s.notes,
            status: s.status,
        }
    }
}

/// Upcoming/past session lists, both ordered date-descending.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionLists {
    pub upcoming: Vec<SessionView>,
    pub past: Vec<SessionView>,
}

/// Platform-wide counters for the admin overview cards.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlatformStats {
    pub total_users: usize,
    pub mentor_count: usize,
    pub mentee_count: usize,
    pub active_assignments: usize,
    pub logged_sessions: usize,
}

/// Everything the admin screen renders.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminDashboard {
    pub stats: PlatformStats,
    pub users: Vec<UserResponse>,
    pub assignments: Vec<AssignmentView>,
    pub sessions: Vec<SessionView>,
}

/// One of a mentor's active pairings, with the mentee resolved when the
/// record still exists.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MenteePairing {
    pub assignment_id: Uuid,
    pub start_date: DateTime<Utc>,
    /// Full mentee profile; absent when the reference dangles
    pub mentee: Option<UserResponse>,
    /// Always renderable name (live, snapshot, or placeholder)
    pub display_name: String,
    /// The soonest upcoming session with this mentee, if any
    pub next_session: Option<SessionView>,
}

/// Everything the mentor screen renders.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MentorDashboard {
    pub mentees: Vec<MenteePairing>,
    pub pending_requests: Vec<InterestRequest>,
    pub sessions: SessionLists,
    pub completed_sessions: usize,
}

/// A mentee's current pairing, mentor side.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MentorPairing {
    pub assignment_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub mentor: Option<UserResponse>,
    pub display_name: String,
}

/// Everything the mentee screen renders.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MenteeDashboard {
    /// Current mentor; `None` is the valid "not yet matched" state
    pub mentor: Option<MentorPairing>,
    pub sessions: SessionLists,
    /// Active mentors to explore, excluding the current one
    pub suggested_mentors: Vec<UserResponse>,
}

/// Dashboard service trait for dependency injection.
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Admin overview: stats, roster, assignments, session logs
    async fn admin_dashboard(&self) -> AppResult<AdminDashboard>;

    /// Mentor view for `mentor_id` at time `now`
    async fn mentor_dashboard(&self, mentor_id: Uuid, now: DateTime<Utc>)
        -> AppResult<MentorDashboard>;

    /// Mentee view for `mentee_id` at time `now`
    async fn mentee_dashboard(&self, mentee_id: Uuid, now: DateTime<Utc>)
        -> AppResult<MenteeDashboard>;
}

/// Concrete implementation of DashboardService over the entity store.
pub struct DashboardBuilder<S: EntityStore> {
    store: Arc<S>,
}

impl<S: EntityStore> DashboardBuilder<S> {
    /// Create new dashboard service instance
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// User lookup that degrades to `None` on a dangling reference or a
    /// failed read, so one broken row never sinks a whole view.
    async fn find_user_or_none(&self, id: Uuid) -> Option<User> {
        match self.store.users().find_by_id(id).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("User lookup for {} failed: {}", id, e);
                None
            }
        }
    }
}

/// Pick a renderable name: live record, then snapshot, then placeholder.
fn display_name(live: Option<&str>, snapshot: &str) -> String {
    if let Some(name) = live {
        return name.to_string();
    }
    if snapshot.is_empty() {
        UNKNOWN_USER_NAME.to_string()
    } else {
        snapshot.to_string()
    }
}

fn resolve_assignment(names: &HashMap<Uuid, String>, a: MentorshipAssignment) -> AssignmentView {
    AssignmentView {
        id: a.id,
        mentor_name: display_name(names.get(&a.mentor_id).map(String::as_str), &a.mentor_name),
        mentee_name: display_name(names.get(&a.mentee_id).map(String::as_str), &a.mentee_name),
        start_date: a.start_date,
        status: a.status,
    }
}

fn resolve_session(names: &HashMap<Uuid, String>, s: SessionLog) -> SessionView {
    let mentor_name = display_name(names.get(&s.mentor_id).map(String::as_str), &s.mentor_name);
    let mentee_name = display_name(names.get(&s.mentee_id).map(String::as_str), &s.mentee_name);
    SessionView {
        mentor_name,
        mentee_name,
        ..SessionView::from(s)
    }
}

fn session_lists(sessions: Vec<SessionLog>, now: DateTime<Utc>) -> SessionLists {
    let parts = partition_sessions(sessions, now);
    SessionLists {
        upcoming: parts.upcoming.into_iter().map(SessionView::from).collect(),
        past: parts.past.into_iter().map(SessionView::from).collect(),
    }
}

#[async_trait]
impl<S: EntityStore> DashboardService for DashboardBuilder<S> {
    async fn admin_dashboard(&self) -> AppResult<AdminDashboard> {
        // One batch of independent reads, all-or-nothing
        let (users, assignments, sessions) = parallel::join3(
            async { self.store.users().list().await },
            async { self.store.assignments().list().await },
            async { self.store.sessions().list().await },
        )
        .await?;

        let names: HashMap<Uuid, String> =
            users.iter().map(|u| (u.id, u.name.clone())).collect();

        let stats = PlatformStats {
            total_users: users.len(),
            mentor_count: users.iter().filter(|u| u.role == UserRole::Mentor).count(),
            mentee_count: users.iter().filter(|u| u.role == UserRole::Mentee).count(),
            active_assignments: assignments
                .iter()
                .filter(|a| a.status == AssignmentStatus::Active)
                .count(),
            logged_sessions: sessions.len(),
        };

        Ok(AdminDashboard {
            stats,
            users: users.into_iter().map(UserResponse::from).collect(),
            assignments: assignments
                .into_iter()
                .map(|a| resolve_assignment(&names, a))
                .collect(),
            sessions: sessions
                .into_iter()
                .map(|s| resolve_session(&names, s))
                .collect(),
        })
    }

    async fn mentor_dashboard(
        &self,
        mentor_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<MentorDashboard> {
        let (assignments, sessions, pending_requests) = parallel::join3(
            async { self.store.assignments().find_active_by_mentor(mentor_id).await },
            async { self.store.sessions().list_by_mentor(mentor_id).await },
            async { self.store.interests().list_pending_by_mentor(mentor_id).await },
        )
        .await?;

        let completed_sessions = sessions
            .iter()
            .filter(|s| s.status == SessionStatus::Completed)
            .count();

        // Soonest upcoming session per mentee, taken from the raw rows;
        // the upcoming list itself stays date-descending
        let mut next_by_mentee: HashMap<Uuid, SessionLog> = HashMap::new();
        for s in sessions
            .iter()
            .filter(|s| s.status == SessionStatus::Scheduled && s.session_date >= now)
        {
            let is_sooner = next_by_mentee
                .get(&s.mentee_id)
                .map_or(true, |cur| s.session_date < cur.session_date);
            if is_sooner {
                next_by_mentee.insert(s.mentee_id, s.clone());
            }
        }

        let lists = session_lists(sessions, now);

        // Counterpart lookups degrade per row; they never fail the view
        let counterparts = parallel::join_all(
            assignments
                .iter()
                .map(|a| {
                    let mentee_id = a.mentee_id;
                    async move { Ok::<_, AppError>(self.find_user_or_none(mentee_id).await) }
                })
                .collect(),
        )
        .await?;

        let mentees = assignments
            .into_iter()
            .zip(counterparts)
            .map(|(a, mentee)| {
                let name = display_name(mentee.as_ref().map(|u| u.name.as_str()), &a.mentee_name);
                let next_session = next_by_mentee
                    .get(&a.mentee_id)
                    .cloned()
                    .map(SessionView::from);
                MenteePairing {
                    assignment_id: a.id,
                    start_date: a.start_date,
                    mentee: mentee.map(UserResponse::from),
                    display_name: name,
                    next_session,
                }
            })
            .collect();

        Ok(MentorDashboard {
            mentees,
            pending_requests,
            sessions: lists,
            completed_sessions,
        })
    }

    async fn mentee_dashboard(
        &self,
        mentee_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<MenteeDashboard> {
        let (assignments, sessions, pool) = parallel::join3(
            async { self.store.assignments().find_active_by_mentee(mentee_id).await },
            async { self.store.sessions().list_by_mentee(mentee_id).await },
            async { self.store.users().list_active_mentors().await },
        )
        .await?;

        // By product invariant there is at most one; if duplicates ever
        // race in, the first is shown
        let mut current_mentor_id = None;
        let mentor = match assignments.into_iter().next() {
            Some(a) => {
                current_mentor_id = Some(a.mentor_id);
                let live = self.find_user_or_none(a.mentor_id).await;
                let name = display_name(live.as_ref().map(|u| u.name.as_str()), &a.mentor_name);
                Some(MentorPairing {
                    assignment_id: a.id,
                    start_date: a.start_date,
                    mentor: live.map(UserResponse::from),
                    display_name: name,
                })
            }
            None => None,
        };

        let suggested_mentors = pool
            .into_iter()
            .filter(|u| Some(u.id) != current_mentor_id)
            .map(UserResponse::from)
            .collect();

        Ok(MenteeDashboard {
            mentor,
            sessions: session_lists(sessions, now),
            suggested_mentors,
        })
    }
}
