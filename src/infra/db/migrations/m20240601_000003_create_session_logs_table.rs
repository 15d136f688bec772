//! Migration: Create the session_logs table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SessionLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SessionLogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SessionLogs::MentorId).uuid().not_null())
                    .col(ColumnDef::new(SessionLogs::MenteeId).uuid().not_null())
                    .col(ColumnDef::new(SessionLogs::MentorName).string().not_null())
                    .col(ColumnDef::new(SessionLogs::MenteeName).string().not_null())
                    .col(ColumnDef::new(SessionLogs::Topic).string().not_null())
                    .col(
                        ColumnDef::new(SessionLogs::SessionDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SessionLogs::DurationMinutes).integer().null())
                    .col(ColumnDef::new(SessionLogs::Notes).text().null())
                    .col(ColumnDef::new(SessionLogs::Status).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_session_logs_mentor")
                    .table(SessionLogs::Table)
                    .col(SessionLogs::MentorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_session_logs_mentee")
                    .table(SessionLogs::Table)
                    .col(SessionLogs::MenteeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SessionLogs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SessionLogs {
    Table,
    Id,
    MentorId,
    MenteeId,
    MentorName,
    MenteeName,
    Topic,
    SessionDate,
    DurationMinutes,
    Notes,
    Status,
}
