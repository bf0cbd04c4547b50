//! Repository for roles the bot manages.

use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    error::AppError,
    model::role::{Role, RoleType},
};

pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a role or updates the name and type of an existing one.
    ///
    /// # Arguments
    /// - `role_id` - Discord role ID
    /// - `name` - Current Discord role name
    /// - `role_type` - What the bot uses the role for
    ///
    /// # Returns
    /// - `Ok(Role)` - The created or updated role
    /// - `Err(AppError)` - Database error
    pub async fn upsert(
        &self,
        role_id: u64,
        name: &str,
        role_type: RoleType,
    ) -> Result<Role, AppError> {
        let entity = entity::prelude::Role::insert(entity::role::ActiveModel {
            id: ActiveValue::Set(role_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
            role_type: ActiveValue::Set(role_type.as_str().to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::role::Column::Id)
                .update_columns([entity::role::Column::Name, entity::role::Column::RoleType])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Role::from_entity(entity)
    }

    pub async fn find_by_id(&self, role_id: u64) -> Result<Option<Role>, AppError> {
        let entity = entity::prelude::Role::find_by_id(role_id.to_string())
            .one(self.db)
            .await?;

        entity.map(Role::from_entity).transpose()
    }

    /// Finds a role of the given type by exact name, e.g. `zG100` or `mute-text`.
    pub async fn find_by_name(
        &self,
        name: &str,
        role_type: RoleType,
    ) -> Result<Option<Role>, AppError> {
        let entity = entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .filter(entity::role::Column::RoleType.eq(role_type.as_str()))
            .one(self.db)
            .await?;

        entity.map(Role::from_entity).transpose()
    }

    /// Gets all roles of a type ordered by ID.
    pub async fn get_by_type(&self, role_type: RoleType) -> Result<Vec<Role>, AppError> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::RoleType.eq(role_type.as_str()))
            .order_by_asc(entity::role::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Role::from_entity)
            .collect()
    }

    /// Deletes a role; assignments cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Role was deleted
    /// - `Ok(false)` - Role was not stored
    pub async fn delete(&self, role_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::Role::delete_by_id(role_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
