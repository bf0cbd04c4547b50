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
                    .table(ChannelPermission::Table)
                    .if_not_exists()
                    .col(string(ChannelPermission::MemberId))
                    .col(string(ChannelPermission::TargetId))
                    .col(big_integer(ChannelPermission::AllowPermissionsValue).default(0))
                    .col(big_integer(ChannelPermission::DenyPermissionsValue).default(0))
                    .col(
                        timestamp_with_time_zone(ChannelPermission::LastUpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_channel_permission")
                            .col(ChannelPermission::MemberId)
                            .col(ChannelPermission::TargetId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_channel_permission_member_id")
                            .from(ChannelPermission::Table, ChannelPermission::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChannelPermission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChannelPermission {
    Table,
    MemberId,
    TargetId,
    AllowPermissionsValue,
    DenyPermissionsValue,
    LastUpdatedAt,
}
