//! Wallet operations.

use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::{
    data::{member::MemberRepository, unit_of_work::UnitOfWork},
    error::{economy::EconomyError, AppError},
    model::member::Member,
};

/// Balances of both sides after a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferOutcome {
    pub from_balance: i64,
    pub to_balance: i64,
}

pub struct EconomyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EconomyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a member's wallet balance, creating the member with zero balance.
    pub async fn balance(&self, member_id: u64) -> Result<i64, AppError> {
        let member = MemberRepository::new(self.db)
            .get_or_create(member_id)
            .await?;

        Ok(member.wallet_balance)
    }

    /// Adds or subtracts currency as an administrator.
    ///
    /// # Returns
    /// - `Ok(Member)` - Member with the new balance
    /// - `Err(AppError::EconomyErr(NegativeBalance))` - Result would be below zero
    pub async fn add_balance(&self, member_id: u64, delta: i64) -> Result<Member, AppError> {
        let uow = UnitOfWork::begin(self.db).await?;
        let member = uow.members().add_balance(member_id, delta).await?;
        uow.commit().await?;

        Ok(member)
    }

    /// Moves currency between two members atomically.
    ///
    /// # Returns
    /// - `Ok(TransferOutcome)` - Balances after the transfer
    /// - `Err(AppError::EconomyErr(InvalidAmount))` - Amount is zero or negative
    /// - `Err(AppError::EconomyErr(SelfTransfer))` - Sender and recipient are the same
    /// - `Err(AppError::EconomyErr(InsufficientFunds))` - Sender balance too low
    pub async fn transfer(
        &self,
        from_id: u64,
        to_id: u64,
        amount: i64,
    ) -> Result<TransferOutcome, AppError> {
        if amount <= 0 {
            return Err(EconomyError::InvalidAmount(amount).into());
        }
        if from_id == to_id {
            return Err(EconomyError::SelfTransfer.into());
        }

        let uow = UnitOfWork::begin(self.db).await?;

        let sender = uow.members().get_or_create(from_id).await?;
        if sender.wallet_balance < amount {
            return Err(EconomyError::InsufficientFunds {
                balance: sender.wallet_balance,
                required: amount,
            }
            .into());
        }

        let sender = uow.members().add_balance(from_id, -amount).await?;
        let recipient = uow.members().add_balance(to_id, amount).await?;

        uow.commit().await?;

        tracing::info!(from_id, to_id, amount, "Transferred funds");

        Ok(TransferOutcome {
            from_balance: sender.wallet_balance,
            to_balance: recipient.wallet_balance,
        })
    }
}
