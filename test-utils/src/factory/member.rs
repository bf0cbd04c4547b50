//! Member factory for creating test member entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let member = MemberFactory::new(&db)
///     .id("123456789")
///     .wallet_balance(500)
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    first_inviter_id: Option<String>,
    current_inviter_id: Option<String>,
    wallet_balance: i64,
    joined_at: Option<DateTime<Utc>>,
    voice_bypass_until: Option<DateTime<Utc>>,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented numeric string
    /// - wallet_balance: `0`
    /// - no inviters, joined now, no voice bypass
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: next_id().to_string(),
            first_inviter_id: None,
            current_inviter_id: None,
            wallet_balance: 0,
            joined_at: Some(Utc::now()),
            voice_bypass_until: None,
        }
    }

    /// Sets the Discord ID for the member.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the wallet balance.
    pub fn wallet_balance(mut self, wallet_balance: i64) -> Self {
        self.wallet_balance = wallet_balance;
        self
    }

    /// Sets both inviter columns to the given member ID.
    ///
    /// The inviter member must already exist.
    pub fn invited_by(mut self, inviter_id: impl Into<String>) -> Self {
        let inviter_id = inviter_id.into();
        self.first_inviter_id = Some(inviter_id.clone());
        self.current_inviter_id = Some(inviter_id);
        self
    }

    /// Sets the voice bypass expiration.
    pub fn voice_bypass_until(mut self, until: Option<DateTime<Utc>>) -> Self {
        self.voice_bypass_until = until;
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            id: ActiveValue::Set(self.id),
            first_inviter_id: ActiveValue::Set(self.first_inviter_id),
            current_inviter_id: ActiveValue::Set(self.current_inviter_id),
            wallet_balance: ActiveValue::Set(self.wallet_balance),
            joined_at: ActiveValue::Set(self.joined_at),
            rejoined_at: ActiveValue::Set(None),
            voice_bypass_until: ActiveValue::Set(self.voice_bypass_until),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}

/// Creates a member with a specific Discord ID.
///
/// # Example
///
/// ```rust,ignore
/// let member = create_member_with_id(&db, "123456789").await?;
/// ```
pub async fn create_member_with_id(
    db: &DatabaseConnection,
    id: impl Into<String>,
) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).id(id).build().await
}
