//! Migration: Create the interest_requests table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InterestRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InterestRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InterestRequests::MentorId).uuid().not_null())
                    .col(
                        ColumnDef::new(InterestRequests::MentorName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(InterestRequests::MenteeId).uuid().not_null())
                    .col(
                        ColumnDef::new(InterestRequests::MenteeName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InterestRequests::MenteeEmail)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(InterestRequests::Message).text().not_null())
                    .col(ColumnDef::new(InterestRequests::Status).string().not_null())
                    // Server-side write-time marker
                    .col(
                        ColumnDef::new(InterestRequests::RequestedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_interest_requests_mentor_status")
                    .table(InterestRequests::Table)
                    .col(InterestRequests::MentorId)
                    .col(InterestRequests::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InterestRequests::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum InterestRequests {
    Table,
    Id,
    MentorId,
    MentorName,
    MenteeId,
    MenteeName,
    MenteeEmail,
    Message,
    Status,
    RequestedAt,
}
