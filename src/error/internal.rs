use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a Discord snowflake stored as a String.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Failure to convert a Unix timestamp to a Discord timestamp.
    ///
    /// Occurs when computing timeout end times that fall outside the range
    /// Discord accepts.
    #[error("Failed to convert Unix timestamp {timestamp} to Discord timestamp: {reason}")]
    InvalidDiscordTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
        /// The reason for conversion failure
        reason: String,
    },

    /// Stored value does not match any known variant of a domain enum.
    #[error("Unknown {kind} '{value}' stored in database")]
    UnknownStoredValue {
        /// Name of the domain type, e.g. "role type"
        kind: &'static str,
        /// The unrecognised value
        value: String,
    },
}
