//! Moderation models.

use chrono::{DateTime, Utc};

use crate::model::member_role::MemberRole;

/// Restriction applied through a mute role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum MuteKind {
    #[name = "text"]
    Text,
    #[name = "image"]
    Image,
    #[name = "nick"]
    Nick,
    #[name = "live"]
    Live,
    #[name = "rank"]
    Rank,
}

impl MuteKind {
    pub const ALL: [MuteKind; 5] = [Self::Text, Self::Image, Self::Nick, Self::Live, Self::Rank];

    /// Name of the Discord role implementing the mute.
    pub fn role_name(&self) -> &'static str {
        match self {
            Self::Text => "mute-text",
            Self::Image => "mute-image",
            Self::Nick => "mute-nick",
            Self::Live => "mute-live",
            Self::Rank => "mute-rank",
        }
    }

    pub fn from_role_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.role_name() == name)
    }
}

/// Nickname given to members muted with [`MuteKind::Nick`].
pub const NICK_MUTE_NICKNAME: &str = "random";

/// Result of a mute for the bot to apply in Discord.
#[derive(Debug, Clone, PartialEq)]
pub struct MuteOutcome {
    pub kind: MuteKind,
    pub role_id: u64,
    /// `None` is permanent.
    pub expiration_date: Option<DateTime<Utc>>,
    /// Stored mute this one replaced, `None` when the member was not muted.
    pub replaced: Option<MemberRole>,
}
