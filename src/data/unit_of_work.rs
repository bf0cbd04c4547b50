//! Transaction wrapper exposing repositories bound to one transaction.
//!
//! Multi-step operations (purchases, transfers, payment processing) begin a
//! unit of work, use its repositories and commit at the end. An error returned
//! with `?` before `commit()` drops the unit of work, which rolls the
//! transaction back.

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::data::{
    activity::ActivityRepository, channel_permission::ChannelPermissionRepository,
    handled_payment::HandledPaymentRepository, member::MemberRepository,
    member_role::MemberRoleRepository, role::RoleRepository,
};

pub struct UnitOfWork {
    txn: DatabaseTransaction,
}

impl UnitOfWork {
    /// Opens a transaction on the connection pool.
    ///
    /// # Returns
    /// - `Ok(UnitOfWork)` - Open transaction
    /// - `Err(DbErr)` - Failed to begin the transaction
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, DbErr> {
        Ok(Self {
            txn: db.begin().await?,
        })
    }

    /// Underlying transaction, for helpers generic over `ConnectionTrait`.
    pub fn transaction(&self) -> &DatabaseTransaction {
        &self.txn
    }

    pub fn members(&self) -> MemberRepository<'_, DatabaseTransaction> {
        MemberRepository::new(&self.txn)
    }

    pub fn roles(&self) -> RoleRepository<'_, DatabaseTransaction> {
        RoleRepository::new(&self.txn)
    }

    pub fn member_roles(&self) -> MemberRoleRepository<'_, DatabaseTransaction> {
        MemberRoleRepository::new(&self.txn)
    }

    pub fn channel_permissions(&self) -> ChannelPermissionRepository<'_, DatabaseTransaction> {
        ChannelPermissionRepository::new(&self.txn)
    }

    pub fn activities(&self) -> ActivityRepository<'_, DatabaseTransaction> {
        ActivityRepository::new(&self.txn)
    }

    pub fn payments(&self) -> HandledPaymentRepository<'_, DatabaseTransaction> {
        HandledPaymentRepository::new(&self.txn)
    }

    /// Persists every change made through this unit of work.
    pub async fn commit(self) -> Result<(), DbErr> {
        self.txn.commit().await
    }

    /// Discards every change made through this unit of work.
    pub async fn rollback(self) -> Result<(), DbErr> {
        self.txn.rollback().await
    }
}
