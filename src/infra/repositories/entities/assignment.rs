//! Mentorship assignment database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{AssignmentStatus, MentorshipAssignment};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mentorship_assignments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub mentee_id: Uuid,
    /// Display-name snapshot taken at creation time
    pub mentor_name: String,
    pub mentee_name: String,
    pub start_date: DateTimeUtc,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for MentorshipAssignment {
    fn from(model: Model) -> Self {
        MentorshipAssignment {
            id: model.id,
            mentor_id: model.mentor_id,
            mentee_id: model.mentee_id,
            mentor_name: model.mentor_name,
            mentee_name: model.mentee_name,
            start_date: model.start_date,
            // Unknown stored values degrade to the unreachable terminal state
            status: AssignmentStatus::parse(&model.status).unwrap_or(AssignmentStatus::Ended),
        }
    }
}
