//! Voice channel permission overwrites members manage for their channels.

use chrono::{DateTime, Utc};
use serenity::all::Permissions;

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Permission a channel owner can grant or revoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum VoicePermission {
    #[name = "speak"]
    Speak,
    #[name = "connect"]
    Connect,
    #[name = "view"]
    View,
    #[name = "text"]
    Text,
    #[name = "live"]
    Live,
    /// Channel moderator marker.
    #[name = "mod"]
    Mod,
}

impl VoicePermission {
    pub fn flag(&self) -> Permissions {
        match self {
            Self::Speak => Permissions::SPEAK,
            Self::Connect => Permissions::CONNECT,
            Self::View => Permissions::VIEW_CHANNEL,
            Self::Text => Permissions::SEND_MESSAGES,
            Self::Live => Permissions::STREAM,
            Self::Mod => Permissions::MANAGE_MESSAGES,
        }
    }
}

/// How to change a permission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, poise::ChoiceParameter)]
pub enum PermissionChange {
    #[name = "+"]
    Allow,
    #[name = "-"]
    Deny,
    /// Deny when currently allowed, allow otherwise.
    #[default]
    #[name = "toggle"]
    Toggle,
    /// Remove from both sets, inheriting the channel default.
    #[name = "reset"]
    Clear,
}

/// Allow and deny sets of one permission overwrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overwrite {
    pub allow: Permissions,
    pub deny: Permissions,
}

impl Overwrite {
    /// Applies a change for `flag`, keeping it out of the opposite set.
    pub fn apply(self, flag: Permissions, change: PermissionChange) -> Self {
        let allow = match change {
            PermissionChange::Allow => true,
            PermissionChange::Deny => false,
            PermissionChange::Toggle => !self.allow.contains(flag),
            PermissionChange::Clear => {
                return Self {
                    allow: self.allow - flag,
                    deny: self.deny - flag,
                }
            }
        };

        if allow {
            Self {
                allow: self.allow | flag,
                deny: self.deny - flag,
            }
        } else {
            Self {
                allow: self.allow - flag,
                deny: self.deny | flag,
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.allow.is_empty() && self.deny.is_empty()
    }
}

/// Overwrite a member stores for a target in their own channels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelPermission {
    pub member_id: u64,
    /// Member ID, or the guild ID for @everyone.
    pub target_id: u64,
    pub overwrite: Overwrite,
    pub last_updated_at: DateTime<Utc>,
}

impl ChannelPermission {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// Bits unknown to serenity are kept as stored.
    pub fn from_entity(entity: entity::channel_permission::Model) -> Result<Self, AppError> {
        Ok(Self {
            member_id: parse_u64_from_string(entity.member_id)?,
            target_id: parse_u64_from_string(entity.target_id)?,
            overwrite: Overwrite {
                allow: Permissions::from_bits_retain(entity.allow_permissions_value as u64),
                deny: Permissions::from_bits_retain(entity.deny_permissions_value as u64),
            },
            last_updated_at: entity.last_updated_at,
        })
    }
}
