use thiserror::Error;

/// Rule violations in wallet, shop and payment operations.
///
/// Messages are shown to Discord users as-is.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EconomyError {
    #[error("Amount must be greater than zero (got {0})")]
    InvalidAmount(i64),

    #[error("Insufficient funds: balance is {balance}, {required} required")]
    InsufficientFunds { balance: i64, required: i64 },

    #[error("You cannot transfer funds to yourself")]
    SelfTransfer,

    #[error("Balance cannot go below zero (current balance {balance}, change {delta})")]
    NegativeBalance { balance: i64, delta: i64 },

    #[error("Unknown premium role '{0}'")]
    UnknownTier(String),

    #[error("You already have {current}, which is higher than {requested}")]
    CannotDowngrade { current: String, requested: String },

    /// Tier exists in the catalog but its Discord role has not been synced yet.
    #[error("Premium role '{0}' is not configured on this server")]
    RoleNotConfigured(String),

    #[error("Payment #{0} does not exist")]
    PaymentNotFound(i32),

    #[error("Payment #{0} is already assigned to a member")]
    PaymentAlreadyAssigned(i32),
}
