use thiserror::Error;

/// Rule violations in moderation and role-switch commands.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModerationError {
    #[error("Invalid duration '{0}', use forms like 30m, 2h, 1d12h")]
    InvalidDuration(String),

    #[error("Role '{0}' is not configured on this server")]
    RoleNotConfigured(String),

    #[error("Member already has the {0} role")]
    AlreadyAssigned(String),

    #[error("Member does not have the {0} role")]
    NotAssigned(String),

    #[error("Can delete between 1 and 100 messages (got {0})")]
    ClearAmountOutOfRange(u32),

    #[error("Timeout must be between 1 second and 28 days")]
    TimeoutOutOfRange,
}
