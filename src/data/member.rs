//! Member repository for wallet, invite and voice bypass data.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter,
};

use crate::{
    error::{economy::EconomyError, AppError},
    model::member::{JoinKind, Member, RecordJoinParam},
};

pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    /// Creates a new MemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a member by Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member found
    /// - `Ok(None)` - Member has never been recorded
    /// - `Err(AppError)` - Database error or corrupt stored ID
    pub async fn find_by_id(&self, member_id: u64) -> Result<Option<Member>, AppError> {
        let entity = entity::prelude::Member::find_by_id(member_id.to_string())
            .one(self.db)
            .await?;

        entity.map(Member::from_entity).transpose()
    }

    /// Returns the member, inserting an empty record first if none exists.
    ///
    /// New members start with a zero balance and no join metadata. The conflict
    /// clause only touches the key, so existing rows are returned unchanged.
    pub async fn get_or_create(&self, member_id: u64) -> Result<Member, AppError> {
        let entity = entity::prelude::Member::insert(entity::member::ActiveModel {
            id: ActiveValue::Set(member_id.to_string()),
            first_inviter_id: ActiveValue::Set(None),
            current_inviter_id: ActiveValue::Set(None),
            wallet_balance: ActiveValue::Set(0),
            joined_at: ActiveValue::Set(None),
            rejoined_at: ActiveValue::Set(None),
            voice_bypass_until: ActiveValue::Set(None),
        })
        .on_conflict(
            OnConflict::column(entity::member::Column::Id)
                .update_column(entity::member::Column::Id)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Member::from_entity(entity)
    }

    /// Records a member joining the guild.
    ///
    /// A member without a stored join date is treated as joining for the first
    /// time: `joined_at` and both inviter columns are set. A returning member keeps
    /// `first_inviter_id`, gets `rejoined_at` and, when the invite is known, a new
    /// `current_inviter_id`.
    ///
    /// The inviter must already exist as a member.
    ///
    /// # Returns
    /// - `Ok((Member, JoinKind))` - Updated member and whether it was a first join
    /// - `Err(AppError)` - Database error
    pub async fn record_join(
        &self,
        param: RecordJoinParam,
    ) -> Result<(Member, JoinKind), AppError> {
        let existing = entity::prelude::Member::find_by_id(param.member_id.to_string())
            .one(self.db)
            .await?;
        let inviter = param.inviter_id.map(|id| id.to_string());

        let (entity, kind) = match existing {
            None => {
                let entity = entity::member::ActiveModel {
                    id: ActiveValue::Set(param.member_id.to_string()),
                    first_inviter_id: ActiveValue::Set(inviter.clone()),
                    current_inviter_id: ActiveValue::Set(inviter),
                    wallet_balance: ActiveValue::Set(0),
                    joined_at: ActiveValue::Set(Some(param.joined_at)),
                    rejoined_at: ActiveValue::Set(None),
                    voice_bypass_until: ActiveValue::Set(None),
                }
                .insert(self.db)
                .await?;

                (entity, JoinKind::First)
            }
            Some(model) if model.joined_at.is_none() => {
                let first_inviter = model.first_inviter_id.clone().or(inviter.clone());
                let mut active: entity::member::ActiveModel = model.into();
                active.first_inviter_id = ActiveValue::Set(first_inviter);
                active.current_inviter_id = ActiveValue::Set(inviter);
                active.joined_at = ActiveValue::Set(Some(param.joined_at));

                (active.update(self.db).await?, JoinKind::First)
            }
            Some(model) => {
                let mut active: entity::member::ActiveModel = model.into();
                if inviter.is_some() {
                    active.current_inviter_id = ActiveValue::Set(inviter);
                }
                active.rejoined_at = ActiveValue::Set(Some(param.joined_at));

                (active.update(self.db).await?, JoinKind::Rejoin)
            }
        };

        Ok((Member::from_entity(entity)?, kind))
    }

    /// Sets the wallet balance, creating the member if needed.
    ///
    /// # Returns
    /// - `Ok(Member)` - Updated member
    /// - `Err(AppError::EconomyErr(NegativeBalance))` - `balance` is below zero
    pub async fn set_balance(&self, member_id: u64, balance: i64) -> Result<Member, AppError> {
        let member = self.get_or_create(member_id).await?;

        if balance < 0 {
            return Err(EconomyError::NegativeBalance {
                balance: member.wallet_balance,
                delta: balance - member.wallet_balance,
            }
            .into());
        }

        let entity = entity::member::ActiveModel {
            id: ActiveValue::Unchanged(member_id.to_string()),
            wallet_balance: ActiveValue::Set(balance),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Member::from_entity(entity)
    }

    /// Adds `delta` (which may be negative) to the wallet balance.
    ///
    /// # Returns
    /// - `Ok(Member)` - Updated member
    /// - `Err(AppError::EconomyErr(NegativeBalance))` - Result would be below zero;
    ///   nothing is written
    pub async fn add_balance(&self, member_id: u64, delta: i64) -> Result<Member, AppError> {
        let member = self.get_or_create(member_id).await?;

        let balance = member
            .wallet_balance
            .checked_add(delta)
            .filter(|balance| *balance >= 0)
            .ok_or(EconomyError::NegativeBalance {
                balance: member.wallet_balance,
                delta,
            })?;

        self.set_balance(member_id, balance).await
    }

    /// Sets or clears the voice bypass expiration.
    pub async fn set_voice_bypass_until(
        &self,
        member_id: u64,
        until: Option<DateTime<Utc>>,
    ) -> Result<Member, AppError> {
        self.get_or_create(member_id).await?;

        let entity = entity::member::ActiveModel {
            id: ActiveValue::Unchanged(member_id.to_string()),
            voice_bypass_until: ActiveValue::Set(until),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Member::from_entity(entity)
    }

    /// Counts members whose latest join used an invite from `inviter_id`.
    pub async fn count_invited_by(&self, inviter_id: u64) -> Result<u64, AppError> {
        let count = entity::prelude::Member::find()
            .filter(entity::member::Column::CurrentInviterId.eq(inviter_id.to_string()))
            .count(self.db)
            .await?;

        Ok(count)
    }
}
