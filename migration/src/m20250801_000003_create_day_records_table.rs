use crate::m20250801_000001_create_users_table::Users;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DayRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DayRecords::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DayRecords::UserId).uuid().not_null())
                    .col(ColumnDef::new(DayRecords::Date).date().not_null())
                    .col(
                        ColumnDef::new(DayRecords::IsEnded)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(DayRecords::EndedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(DayRecords::TotalTasks)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DayRecords::CompletedTasks)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DayRecords::OverallProductivity)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DayRecords::ProductivityLabel)
                            .string_len(32)
                            .not_null()
                            .default("Not Productive"),
                    )
                    .col(ColumnDef::new(DayRecords::Summary).text())
                    .col(
                        ColumnDef::new(DayRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(DayRecords::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_day_records_user_id")
                            .from(DayRecords::Table, DayRecords::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 1ユーザー1日につき1レコード。終了処理の条件付き UPSERT の衝突対象でもある
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(DayRecords::Table)
                    .name("idx_day_records_user_id_date")
                    .col(DayRecords::UserId)
                    .col(DayRecords::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(DayRecords::Table)
                    .name("idx_day_records_user_id_date")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DayRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DayRecords {
    Table,
    Id,
    UserId,
    Date,
    IsEnded,
    EndedAt,
    TotalTasks,
    CompletedTasks,
    OverallProductivity,
    ProductivityLabel,
    Summary,
    CreatedAt,
    UpdatedAt,
}
