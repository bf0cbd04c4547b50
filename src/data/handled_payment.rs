//! Ledger of payments the bot has processed.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    error::{economy::EconomyError, AppError},
    model::payment::{HandledPayment, IncomingPayment},
};

pub struct HandledPaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HandledPaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a payment, optionally credited to a member.
    ///
    /// # Returns
    /// - `Ok(HandledPayment)` - Created ledger row
    /// - `Err(AppError::DbErr)` - Database error; in production this includes a
    ///   duplicate (`name`, `amount`, `paid_at`) rejected by the unique index
    pub async fn create(
        &self,
        payment: &IncomingPayment,
        member_id: Option<u64>,
    ) -> Result<HandledPayment, AppError> {
        let entity = entity::handled_payment::ActiveModel {
            member_id: ActiveValue::Set(member_id.map(|id| id.to_string())),
            name: ActiveValue::Set(payment.name.clone()),
            amount: ActiveValue::Set(payment.amount),
            paid_at: ActiveValue::Set(payment.paid_at),
            payment_type: ActiveValue::Set(payment.payment_type.clone()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        HandledPayment::from_entity(entity)
    }

    pub async fn find_by_id(&self, payment_id: i32) -> Result<Option<HandledPayment>, AppError> {
        let entity = entity::prelude::HandledPayment::find_by_id(payment_id)
            .one(self.db)
            .await?;

        entity.map(HandledPayment::from_entity).transpose()
    }

    /// Whether a payment with the same name, amount and time is already recorded.
    pub async fn exists(
        &self,
        name: &str,
        amount: i64,
        paid_at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let count = entity::prelude::HandledPayment::find()
            .filter(entity::handled_payment::Column::Name.eq(name))
            .filter(entity::handled_payment::Column::Amount.eq(amount))
            .filter(entity::handled_payment::Column::PaidAt.eq(paid_at))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Links an unassigned payment to a member.
    ///
    /// # Returns
    /// - `Ok(HandledPayment)` - Updated payment
    /// - `Err(AppError::EconomyErr(PaymentNotFound))` - No payment with that ID
    /// - `Err(AppError::EconomyErr(PaymentAlreadyAssigned))` - Payment already credited
    pub async fn assign_member(
        &self,
        payment_id: i32,
        member_id: u64,
    ) -> Result<HandledPayment, AppError> {
        let model = entity::prelude::HandledPayment::find_by_id(payment_id)
            .one(self.db)
            .await?
            .ok_or(EconomyError::PaymentNotFound(payment_id))?;

        if model.member_id.is_some() {
            return Err(EconomyError::PaymentAlreadyAssigned(payment_id).into());
        }

        let mut active: entity::handled_payment::ActiveModel = model.into();
        active.member_id = ActiveValue::Set(Some(member_id.to_string()));

        HandledPayment::from_entity(active.update(self.db).await?)
    }

    /// Gets payments without a member, newest first.
    pub async fn get_unassigned(&self, limit: u64) -> Result<Vec<HandledPayment>, AppError> {
        entity::prelude::HandledPayment::find()
            .filter(entity::handled_payment::Column::MemberId.is_null())
            .order_by_desc(entity::handled_payment::Column::PaidAt)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(HandledPayment::from_entity)
            .collect()
    }
}
