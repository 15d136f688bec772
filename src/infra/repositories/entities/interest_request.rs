//! Interest request database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::InterestRequest;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "interest_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub mentor_name: String,
    pub mentee_id: Uuid,
    pub mentee_name: String,
    pub mentee_email: String,
    pub message: String,
    pub status: String,
    /// Server-assigned write-time marker (database default)
    pub requested_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for InterestRequest {
    fn from(model: Model) -> Self {
        InterestRequest {
            id: model.id,
            mentor_id: model.mentor_id,
            mentor_name: model.mentor_name,
            mentee_id: model.mentee_id,
            mentee_name: model.mentee_name,
            mentee_email: model.mentee_email,
            message: model.message,
            status: model.status,
            requested_at: model.requested_at,
        }
    }
}
