use chrono::Duration;

use crate::error::moderation::ModerationError;

/// Longest duration accepted for mutes and voice bypasses, ten years.
pub const MAX_DURATION_DAYS: i64 = 3650;

/// Parses a human duration such as `30m`, `2h`, `1d12h` or `45s`.
///
/// A bare number is read as hours. `0` or an empty string mean "no expiration"
/// and yield `Ok(None)`. Durations longer than [`MAX_DURATION_DAYS`] are rejected.
///
/// # Returns
/// - `Ok(Some(Duration))` - Positive duration
/// - `Ok(None)` - Permanent
/// - `Err(ModerationError::InvalidDuration)` - Unknown unit, malformed or too long input
pub fn parse_duration(input: &str) -> Result<Option<Duration>, ModerationError> {
    let trimmed = input.trim().to_lowercase();
    if trimmed.is_empty() || trimmed == "0" {
        return Ok(None);
    }

    let invalid = || ModerationError::InvalidDuration(input.to_string());

    if let Ok(hours) = trimmed.parse::<i64>() {
        return match hours {
            h if h < 0 => Err(invalid()),
            0 => Ok(None),
            h => Duration::try_hours(h)
                .filter(|duration| within_limit(*duration))
                .map(Some)
                .ok_or_else(invalid),
        };
    }

    let mut total = Duration::zero();
    let mut digits = String::new();

    for c in trimmed.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        let value: i64 = digits.parse().map_err(|_| invalid())?;
        digits.clear();

        let part = match c {
            's' => Duration::try_seconds(value),
            'm' => Duration::try_minutes(value),
            'h' => Duration::try_hours(value),
            'd' => Duration::try_days(value),
            'w' => Duration::try_weeks(value),
            _ => return Err(invalid()),
        };

        total = part
            .and_then(|part| total.checked_add(&part))
            .filter(|total| within_limit(*total))
            .ok_or_else(invalid)?;
    }

    // trailing digits without a unit, e.g. "1d5"
    if !digits.is_empty() {
        return Err(invalid());
    }

    if total <= Duration::zero() {
        return Ok(None);
    }

    Ok(Some(total))
}

fn within_limit(duration: Duration) -> bool {
    Duration::try_days(MAX_DURATION_DAYS).is_some_and(|max| duration <= max)
}

/// Formats a duration as its largest units, e.g. `1d 12h`.
pub fn format_duration(duration: Duration) -> String {
    let mut seconds = duration.num_seconds().max(0);
    let days = seconds / 86_400;
    seconds %= 86_400;
    let hours = seconds / 3_600;
    seconds %= 3_600;
    let minutes = seconds / 60;
    seconds %= 60;

    let parts: Vec<String> = [(days, "d"), (hours, "h"), (minutes, "m"), (seconds, "s")]
        .into_iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{value}{unit}"))
        .collect();

    if parts.is_empty() {
        "0s".to_string()
    } else {
        parts.join(" ")
    }
}
