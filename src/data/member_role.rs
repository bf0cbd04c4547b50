//! Role assignment repository.
//!
//! Assignments link members to managed roles with an optional expiration date.
//! Premium and mute roles expire; the role expiry job removes them.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::{
        member_role::{AssignedRole, MemberRole},
        role::{Role, RoleType},
    },
};

pub struct MemberRoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRoleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Assigns a role, replacing the expiration date if already assigned.
    ///
    /// # Arguments
    /// - `member_id` - Existing member
    /// - `role_id` - Existing role
    /// - `expiration_date` - When the role expires, `None` for permanent
    pub async fn assign(
        &self,
        member_id: u64,
        role_id: u64,
        expiration_date: Option<DateTime<Utc>>,
    ) -> Result<MemberRole, AppError> {
        let entity = entity::prelude::MemberRole::insert(entity::member_role::ActiveModel {
            member_id: ActiveValue::Set(member_id.to_string()),
            role_id: ActiveValue::Set(role_id.to_string()),
            expiration_date: ActiveValue::Set(expiration_date),
        })
        .on_conflict(
            OnConflict::columns([
                entity::member_role::Column::MemberId,
                entity::member_role::Column::RoleId,
            ])
            .update_column(entity::member_role::Column::ExpirationDate)
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        MemberRole::from_entity(entity)
    }

    pub async fn find(&self, member_id: u64, role_id: u64) -> Result<Option<MemberRole>, AppError> {
        let entity =
            entity::prelude::MemberRole::find_by_id((member_id.to_string(), role_id.to_string()))
                .one(self.db)
                .await?;

        entity.map(MemberRole::from_entity).transpose()
    }

    /// Gets every role assigned to a member together with its definition.
    pub async fn get_by_member(&self, member_id: u64) -> Result<Vec<AssignedRole>, AppError> {
        let rows = entity::prelude::MemberRole::find()
            .filter(entity::member_role::Column::MemberId.eq(member_id.to_string()))
            .find_also_related(entity::prelude::Role)
            .order_by_asc(entity::member_role::Column::RoleId)
            .all(self.db)
            .await?;

        rows.into_iter().map(to_assigned_role).collect()
    }

    /// Gets a member's roles of one type, e.g. their premium roles.
    pub async fn get_by_member_and_type(
        &self,
        member_id: u64,
        role_type: RoleType,
    ) -> Result<Vec<AssignedRole>, AppError> {
        let rows = entity::prelude::MemberRole::find()
            .filter(entity::member_role::Column::MemberId.eq(member_id.to_string()))
            .find_also_related(entity::prelude::Role)
            .filter(entity::role::Column::RoleType.eq(role_type.as_str()))
            .order_by_asc(entity::member_role::Column::RoleId)
            .all(self.db)
            .await?;

        rows.into_iter().map(to_assigned_role).collect()
    }

    /// Removes an assignment.
    ///
    /// # Returns
    /// - `Ok(true)` - Assignment removed
    /// - `Ok(false)` - Member did not have the role
    pub async fn remove(&self, member_id: u64, role_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::MemberRole::delete_by_id((
            member_id.to_string(),
            role_id.to_string(),
        ))
        .exec(self.db)
        .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets assignments whose expiration date is at or before `now`.
    ///
    /// Permanent assignments are never returned.
    pub async fn get_expired(&self, now: DateTime<Utc>) -> Result<Vec<MemberRole>, AppError> {
        entity::prelude::MemberRole::find()
            .filter(entity::member_role::Column::ExpirationDate.is_not_null())
            .filter(entity::member_role::Column::ExpirationDate.lte(now))
            .order_by_asc(entity::member_role::Column::ExpirationDate)
            .all(self.db)
            .await?
            .into_iter()
            .map(MemberRole::from_entity)
            .collect()
    }
}

fn to_assigned_role(
    (member_role, role): (entity::member_role::Model, Option<entity::role::Model>),
) -> Result<AssignedRole, AppError> {
    let role = role.ok_or_else(|| {
        AppError::InternalError(format!(
            "member_role row references missing role {}",
            member_role.role_id
        ))
    })?;

    Ok(AssignedRole {
        role: Role::from_entity(role)?,
        expiration_date: member_role.expiration_date,
    })
}
