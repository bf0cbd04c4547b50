//! Repository for voice channel permission overwrites members keep.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use serenity::all::Permissions;

use crate::{
    error::AppError,
    model::channel_permission::{ChannelPermission, Overwrite},
};

pub struct ChannelPermissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChannelPermissionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        member_id: u64,
        target_id: u64,
    ) -> Result<Option<ChannelPermission>, AppError> {
        let entity = entity::prelude::ChannelPermission::find_by_id((
            member_id.to_string(),
            target_id.to_string(),
        ))
        .one(self.db)
        .await?;

        entity.map(ChannelPermission::from_entity).transpose()
    }

    /// Stores the overwrite for an owner and target, replacing any previous one.
    ///
    /// # Arguments
    /// - `member_id` - Channel owner
    /// - `target_id` - Member or guild (@everyone) the overwrite applies to
    /// - `overwrite` - Allow and deny sets
    /// - `now` - Update timestamp
    pub async fn upsert(
        &self,
        member_id: u64,
        target_id: u64,
        overwrite: Overwrite,
        now: DateTime<Utc>,
    ) -> Result<ChannelPermission, AppError> {
        let entity =
            entity::prelude::ChannelPermission::insert(entity::channel_permission::ActiveModel {
                member_id: ActiveValue::Set(member_id.to_string()),
                target_id: ActiveValue::Set(target_id.to_string()),
                allow_permissions_value: ActiveValue::Set(overwrite.allow.bits() as i64),
                deny_permissions_value: ActiveValue::Set(overwrite.deny.bits() as i64),
                last_updated_at: ActiveValue::Set(now),
            })
            .on_conflict(
                OnConflict::columns([
                    entity::channel_permission::Column::MemberId,
                    entity::channel_permission::Column::TargetId,
                ])
                .update_columns([
                    entity::channel_permission::Column::AllowPermissionsValue,
                    entity::channel_permission::Column::DenyPermissionsValue,
                    entity::channel_permission::Column::LastUpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        ChannelPermission::from_entity(entity)
    }

    /// Gets every overwrite an owner stores, ordered by target.
    pub async fn get_by_owner(&self, member_id: u64) -> Result<Vec<ChannelPermission>, AppError> {
        entity::prelude::ChannelPermission::find()
            .filter(entity::channel_permission::Column::MemberId.eq(member_id.to_string()))
            .order_by_asc(entity::channel_permission::Column::TargetId)
            .all(self.db)
            .await?
            .into_iter()
            .map(ChannelPermission::from_entity)
            .collect()
    }

    /// Counts an owner's targets whose allow set contains `flag`.
    ///
    /// Used to enforce the channel moderator allowance.
    pub async fn count_with_flag(
        &self,
        member_id: u64,
        flag: Permissions,
    ) -> Result<usize, AppError> {
        let permissions = self.get_by_owner(member_id).await?;

        Ok(permissions
            .iter()
            .filter(|permission| permission.overwrite.allow.contains(flag))
            .count())
    }

    pub async fn delete(&self, member_id: u64, target_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::ChannelPermission::delete_by_id((
            member_id.to_string(),
            target_id.to_string(),
        ))
        .exec(self.db)
        .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes all overwrites of an owner, returning how many were removed.
    pub async fn delete_by_owner(&self, member_id: u64) -> Result<u64, AppError> {
        let result = entity::prelude::ChannelPermission::delete_many()
            .filter(entity::channel_permission::Column::MemberId.eq(member_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
