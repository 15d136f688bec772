//! Mentorship assignment entity: a persisted mentor-mentee pairing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Assignment lifecycle status.
///
/// `Ended` is representable for stored data but nothing currently
/// produces it; pairings are removed by hard delete instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Active,
    Pending,
    Ended,
}

impl AssignmentStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(AssignmentStatus::Active),
            "pending" => Some(AssignmentStatus::Pending),
            "ended" => Some(AssignmentStatus::Ended),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Active => "active",
            AssignmentStatus::Pending => "pending",
            AssignmentStatus::Ended => "ended",
        }
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A mentor-mentee pairing.
///
/// `mentor_name`/`mentee_name` are display-name snapshots taken when the
/// pairing is created, so rows stay renderable after either user record
/// is deactivated or disappears.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorshipAssignment {
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub mentee_id: Uuid,
    pub mentor_name: String,
    pub mentee_name: String,
    pub start_date: DateTime<Utc>,
    pub status: AssignmentStatus,
}

impl MentorshipAssignment {
    /// The other side of the pairing relative to `user_id`, or `None`
    /// when the user is not part of this assignment.
    pub fn counterpart_of(&self, user_id: Uuid) -> Option<Uuid> {
        if user_id == self.mentor_id {
            Some(self.mentee_id)
        } else if user_id == self.mentee_id {
            Some(self.mentor_id)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairing(mentor_id: Uuid, mentee_id: Uuid) -> MentorshipAssignment {
        MentorshipAssignment {
            id: Uuid::new_v4(),
            mentor_id,
            mentee_id,
            mentor_name: "Mentor".to_string(),
            mentee_name: "Mentee".to_string(),
            start_date: Utc::now(),
            status: AssignmentStatus::Active,
        }
    }

    #[test]
    fn counterpart_resolution() {
        let mentor = Uuid::new_v4();
        let mentee = Uuid::new_v4();
        let a = pairing(mentor, mentee);

        assert_eq!(a.counterpart_of(mentor), Some(mentee));
        assert_eq!(a.counterpart_of(mentee), Some(mentor));
        assert_eq!(a.counterpart_of(Uuid::new_v4()), None);
    }

    #[test]
    fn status_parsing_round_trips() {
        for status in [
            AssignmentStatus::Active,
            AssignmentStatus::Pending,
            AssignmentStatus::Ended,
        ] {
            assert_eq!(AssignmentStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(AssignmentStatus::parse("archived"), None);
    }
}
