//! Migration: Create the mentorship_assignments table.
//!
//! Mentor/mentee IDs are weak references into users; no foreign key
//! constraints, so rows survive user deactivation or removal.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::MentorId).uuid().not_null())
                    .col(ColumnDef::new(Assignments::MenteeId).uuid().not_null())
                    .col(ColumnDef::new(Assignments::MentorName).string().not_null())
                    .col(ColumnDef::new(Assignments::MenteeName).string().not_null())
                    .col(
                        ColumnDef::new(Assignments::StartDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::Status).string().not_null())
                    .to_owned(),
            )
            .await?;

        // The resolver scans by role-keyed ID plus status
        manager
            .create_index(
                Index::create()
                    .name("idx_assignments_mentor_status")
                    .table(Assignments::Table)
                    .col(Assignments::MentorId)
                    .col(Assignments::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_assignments_mentee_status")
                    .table(Assignments::Table)
                    .col(Assignments::MenteeId)
                    .col(Assignments::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Assignments {
    #[iden = "mentorship_assignments"]
    Table,
    Id,
    MentorId,
    MenteeId,
    MentorName,
    MenteeName,
    StartDate,
    Status,
}
