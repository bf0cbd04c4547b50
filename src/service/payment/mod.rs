//! Payment processing.
//!
//! Payments come from an external feed. Each payer is expected to put their
//! Discord ID into the payment name; matching payments are credited to that
//! member's wallet, the rest wait in the ledger for an admin to assign them.

pub mod feed;

use sea_orm::DatabaseConnection;

use crate::{
    data::{handled_payment::HandledPaymentRepository, unit_of_work::UnitOfWork},
    error::{economy::EconomyError, AppError},
    model::payment::{HandledPayment, IncomingPayment, PaymentOutcome},
    service::payment::feed::PaymentFeed,
    util::parse::find_snowflake,
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an incoming payment and credits the payer when identifiable.
    ///
    /// # Returns
    /// - `Ok(PaymentOutcome::Duplicate)` - Same name, amount and time already recorded
    /// - `Ok(PaymentOutcome::Credited)` - Name contained a Discord ID; wallet credited
    /// - `Ok(PaymentOutcome::Unassigned)` - Recorded without a member
    /// - `Err(AppError::EconomyErr(InvalidAmount))` - Amount is zero or negative
    pub async fn process(&self, payment: &IncomingPayment) -> Result<PaymentOutcome, AppError> {
        if payment.amount <= 0 {
            return Err(EconomyError::InvalidAmount(payment.amount).into());
        }

        let uow = UnitOfWork::begin(self.db).await?;

        if uow
            .payments()
            .exists(&payment.name, payment.amount, payment.paid_at)
            .await?
        {
            return Ok(PaymentOutcome::Duplicate);
        }

        let outcome = match find_snowflake(&payment.name) {
            Some(member_id) => {
                let member = uow.members().add_balance(member_id, payment.amount).await?;
                let handled = uow.payments().create(payment, Some(member_id)).await?;

                PaymentOutcome::Credited {
                    payment: handled,
                    member_id,
                    balance_after: member.wallet_balance,
                }
            }
            None => PaymentOutcome::Unassigned {
                payment: uow.payments().create(payment, None).await?,
            },
        };

        uow.commit().await?;

        Ok(outcome)
    }

    /// Credits an unassigned payment to a member.
    ///
    /// # Returns
    /// - `Ok((HandledPayment, i64))` - Assigned payment and the member's new balance
    /// - `Err(AppError::EconomyErr(PaymentNotFound | PaymentAlreadyAssigned))`
    pub async fn assign(
        &self,
        payment_id: i32,
        member_id: u64,
    ) -> Result<(HandledPayment, i64), AppError> {
        let uow = UnitOfWork::begin(self.db).await?;

        uow.members().get_or_create(member_id).await?;
        let payment = uow.payments().assign_member(payment_id, member_id).await?;
        let member = uow.members().add_balance(member_id, payment.amount).await?;

        uow.commit().await?;

        Ok((payment, member.wallet_balance))
    }

    pub async fn unassigned(&self, limit: u64) -> Result<Vec<HandledPayment>, AppError> {
        HandledPaymentRepository::new(self.db)
            .get_unassigned(limit)
            .await
    }

    /// Fetches recent payments from the feed and processes each one.
    ///
    /// A payment that fails is logged and skipped so one bad entry does not
    /// block the rest.
    pub async fn poll_feed(&self, feed: &dyn PaymentFeed) -> Result<Vec<PaymentOutcome>, AppError> {
        let payments = feed.fetch_recent().await?;
        let mut outcomes = Vec::with_capacity(payments.len());

        for payment in &payments {
            match self.process(payment).await {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => tracing::error!(
                    name = %payment.name,
                    amount = payment.amount,
                    "Failed to process payment: {}",
                    e
                ),
            }
        }

        Ok(outcomes)
    }
}
