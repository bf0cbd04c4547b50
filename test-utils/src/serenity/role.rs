//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role by deserializing the JSON Discord would send.
///
/// All other fields are set to defaults (not hoisted, not managed, not
/// mentionable, zero permissions).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name, e.g. `"zG100"` or `"mute-text"`
/// - `color` - Role color as a 32-bit RGB integer
/// - `position` - Role position in the hierarchy
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// let role = create_test_role(123456789, "zG500", 0xFFD700, 10);
/// assert_eq!(role.name, "zG500");
/// ```
pub fn create_test_role(role_id: u64, name: &str, color: u32, position: i16) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": color,
        "colors": {
            "primary_color": color,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
