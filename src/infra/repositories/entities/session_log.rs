//! Session log database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{SessionLog, SessionStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "session_logs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub mentee_id: Uuid,
    /// Display-name snapshot taken at write time
    pub mentor_name: String,
    pub mentee_name: String,
    pub topic: String,
    pub session_date: DateTimeUtc,
    pub duration_minutes: Option<i32>,
    pub notes: Option<String>,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for SessionLog {
    fn from(model: Model) -> Self {
        SessionLog {
            id: model.id,
            mentor_id: model.mentor_id,
            mentee_id: model.mentee_id,
            mentor_name: model.mentor_name,
            mentee_name: model.mentee_name,
            topic: model.topic,
            session_date: model.session_date,
            duration_minutes: model.duration_minutes,
            notes: model.notes,
            // Unknown stored values are hidden from both dashboard lists
            status: SessionStatus::parse(&model.status).unwrap_or(SessionStatus::Cancelled),
        }
    }
}
