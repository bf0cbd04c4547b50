//! Member domain models.

use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    util::parse::{parse_optional_u64, parse_u64_from_string},
};

/// Discord user tracked by the bot with wallet and invite metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// Discord ID of the member.
    pub id: u64,
    /// Member whose invite was used on the first join.
    pub first_inviter_id: Option<u64>,
    /// Member whose invite was used on the latest join.
    pub current_inviter_id: Option<u64>,
    pub wallet_balance: i64,
    pub joined_at: Option<DateTime<Utc>>,
    pub rejoined_at: Option<DateTime<Utc>>,
    /// Until when the member may use voice commands without premium.
    pub voice_bypass_until: Option<DateTime<Utc>>,
}

impl Member {
    /// Converts an entity model to a member domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Member)` - The converted member
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored ID is not a valid u64
    pub fn from_entity(entity: entity::member::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: parse_u64_from_string(entity.id)?,
            first_inviter_id: parse_optional_u64(entity.first_inviter_id)?,
            current_inviter_id: parse_optional_u64(entity.current_inviter_id)?,
            wallet_balance: entity.wallet_balance,
            joined_at: entity.joined_at,
            rejoined_at: entity.rejoined_at,
            voice_bypass_until: entity.voice_bypass_until,
        })
    }

    /// Whether the member's voice bypass is active at `now`.
    pub fn has_voice_bypass(&self, now: DateTime<Utc>) -> bool {
        self.voice_bypass_until.is_some_and(|until| until > now)
    }
}

/// Parameters for recording a member joining the guild.
#[derive(Debug, Clone)]
pub struct RecordJoinParam {
    pub member_id: u64,
    /// Member whose invite was used, if it could be determined.
    pub inviter_id: Option<u64>,
    pub joined_at: DateTime<Utc>,
}

/// Whether a join was the member's first or a return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    First,
    Rejoin,
}
