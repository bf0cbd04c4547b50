use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_member_table::Member;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Activity::Table)
                    .if_not_exists()
                    .col(string(Activity::MemberId))
                    .col(date(Activity::Date))
                    .col(string(Activity::ActivityType))
                    .col(big_integer(Activity::Points).default(0))
                    .primary_key(
                        Index::create()
                            .name("pk_activity")
                            .col(Activity::MemberId)
                            .col(Activity::Date)
                            .col(Activity::ActivityType),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_member_id")
                            .from(Activity::Table, Activity::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_activity_date")
                    .table(Activity::Table)
                    .col(Activity::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Activity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Activity {
    Table,
    MemberId,
    Date,
    ActivityType,
    Points,
}
