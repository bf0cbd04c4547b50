use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(string(Member::Id).primary_key())
                    .col(string_null(Member::FirstInviterId))
                    .col(string_null(Member::CurrentInviterId))
                    .col(big_integer(Member::WalletBalance).default(0))
                    .col(timestamp_with_time_zone_null(Member::JoinedAt))
                    .col(timestamp_with_time_zone_null(Member::RejoinedAt))
                    .col(timestamp_with_time_zone_null(Member::VoiceBypassUntil))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_first_inviter_id")
                            .from(Member::Table, Member::FirstInviterId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_current_inviter_id")
                            .from(Member::Table, Member::CurrentInviterId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    FirstInviterId,
    CurrentInviterId,
    WalletBalance,
    JoinedAt,
    RejoinedAt,
    VoiceBypassUntil,
}
