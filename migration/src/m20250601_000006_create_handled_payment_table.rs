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
                    .table(HandledPayment::Table)
                    .if_not_exists()
                    .col(pk_auto(HandledPayment::Id))
                    .col(string_null(HandledPayment::MemberId))
                    .col(string(HandledPayment::Name))
                    .col(big_integer(HandledPayment::Amount))
                    .col(timestamp_with_time_zone(HandledPayment::PaidAt))
                    .col(string(HandledPayment::PaymentType))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_handled_payment_member_id")
                            .from(HandledPayment::Table, HandledPayment::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_handled_payment_unique")
                            .col(HandledPayment::Name)
                            .col(HandledPayment::Amount)
                            .col(HandledPayment::PaidAt),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HandledPayment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HandledPayment {
    Table,
    Id,
    MemberId,
    Name,
    Amount,
    PaidAt,
    PaymentType,
}
