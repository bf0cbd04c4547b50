//! Factory for creating member role assignments.
//!
//! Assignments reference existing members and roles due to foreign key constraints.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for building member role entities with custom values.
pub struct MemberRoleFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: String,
    role_id: String,
    expiration_date: Option<DateTime<Utc>>,
}

impl<'a> MemberRoleFactory<'a> {
    /// Creates a new factory for the given member and role with no expiration.
    pub fn new(db: &'a DatabaseConnection, member_id: &str, role_id: &str) -> Self {
        Self {
            db,
            member_id: member_id.to_string(),
            role_id: role_id.to_string(),
            expiration_date: None,
        }
    }

    /// Sets the expiration date (`None` never expires).
    pub fn expiration_date(mut self, expiration_date: Option<DateTime<Utc>>) -> Self {
        self.expiration_date = expiration_date;
        self
    }

    /// Builds and inserts the member role entity.
    pub async fn build(self) -> Result<entity::member_role::Model, DbErr> {
        entity::member_role::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            role_id: ActiveValue::Set(self.role_id),
            expiration_date: ActiveValue::Set(self.expiration_date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a permanent member role assignment.
pub async fn create_member_role(
    db: &DatabaseConnection,
    member_id: &str,
    role_id: &str,
) -> Result<entity::member_role::Model, DbErr> {
    MemberRoleFactory::new(db, member_id, role_id).build().await
}
