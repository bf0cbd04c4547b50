//! Factory for creating stored voice channel permission overwrites.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for building channel permission entities with custom values.
pub struct ChannelPermissionFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: String,
    target_id: String,
    allow: i64,
    deny: i64,
}

impl<'a> ChannelPermissionFactory<'a> {
    /// Creates a new factory with empty allow and deny sets.
    pub fn new(db: &'a DatabaseConnection, member_id: &str, target_id: &str) -> Self {
        Self {
            db,
            member_id: member_id.to_string(),
            target_id: target_id.to_string(),
            allow: 0,
            deny: 0,
        }
    }

    /// Sets the allowed permission bits.
    pub fn allow(mut self, bits: u64) -> Self {
        self.allow = bits as i64;
        self
    }

    /// Sets the denied permission bits.
    pub fn deny(mut self, bits: u64) -> Self {
        self.deny = bits as i64;
        self
    }

    /// Builds and inserts the channel permission entity.
    pub async fn build(self) -> Result<entity::channel_permission::Model, DbErr> {
        entity::channel_permission::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            target_id: ActiveValue::Set(self.target_id),
            allow_permissions_value: ActiveValue::Set(self.allow),
            deny_permissions_value: ActiveValue::Set(self.deny),
            last_updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a channel permission that allows the given bits.
pub async fn create_channel_permission(
    db: &DatabaseConnection,
    member_id: &str,
    target_id: &str,
    allow: u64,
) -> Result<entity::channel_permission::Model, DbErr> {
    ChannelPermissionFactory::new(db, member_id, target_id)
        .allow(allow)
        .build()
        .await
}
