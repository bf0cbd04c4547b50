//! Role factory for creating test role entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test roles with customizable fields.
pub struct RoleFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    role_type: String,
}

impl<'a> RoleFactory<'a> {
    /// Creates a new RoleFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented numeric string
    /// - name: `"Role {id}"`
    /// - role_type: `"premium"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: id.to_string(),
            name: format!("Role {}", id),
            role_type: "premium".to_string(),
        }
    }

    /// Sets the Discord role ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the role name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the role type (`premium`, `mute` or `gender`).
    pub fn role_type(mut self, role_type: impl Into<String>) -> Self {
        self.role_type = role_type.into();
        self
    }

    /// Builds and inserts the role entity into the database.
    pub async fn build(self) -> Result<entity::role::Model, DbErr> {
        entity::role::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            role_type: ActiveValue::Set(self.role_type),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a premium role with default values.
pub async fn create_role(db: &DatabaseConnection) -> Result<entity::role::Model, DbErr> {
    RoleFactory::new(db).build().await
}

/// Creates a premium role with the given tier name (e.g. `"zG100"`).
pub async fn create_premium_role(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::role::Model, DbErr> {
    RoleFactory::new(db).name(name).build().await
}

/// Creates a role with the given name and type.
pub async fn create_typed_role(
    db: &DatabaseConnection,
    name: &str,
    role_type: &str,
) -> Result<entity::role::Model, DbErr> {
    RoleFactory::new(db)
        .name(name)
        .role_type(role_type)
        .build()
        .await
}
