use crate::error::{internal::InternalError, AppError};

/// Parses a Discord snowflake stored as a String.
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses an optional stored snowflake, see [`parse_u64_from_string`].
pub fn parse_optional_u64(value: Option<String>) -> Result<Option<u64>, AppError> {
    value.map(parse_u64_from_string).transpose()
}

/// Finds the first Discord snowflake inside free-form text.
///
/// Payers type arbitrary text into the payment name field; a run of 17 to 20
/// digits is taken as the member's Discord ID.
pub fn find_snowflake(text: &str) -> Option<u64> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|run| (17..=20).contains(&run.len()))
        .find_map(|run| run.parse::<u64>().ok())
}
