use thiserror::Error;

/// Rule violations in voice channel self-management.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VoiceError {
    #[error("Voice channel commands require a premium role")]
    PremiumRequired,

    #[error("Your premium role allows at most {limit} channel moderators")]
    ModLimitReached { limit: usize },

    #[error("You cannot change your own channel permissions")]
    SelfTarget,

    #[error("You must be connected to a voice channel")]
    NotInVoiceChannel,

    #[error("Only the channel owner or its moderators can do that")]
    NotChannelOwner,

    #[error("Only the channel owner can appoint moderators")]
    OwnerOnly,

    #[error("User limit must be between 0 and 99 (got {0})")]
    InvalidUserLimit(u32),
}
