//! Conversions between stored voice overwrites and Discord overwrites.

use serenity::all::{PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId, UserId};

use crate::model::channel_permission::{ChannelPermission, Overwrite};

/// Permission marking the owner of a channel the bot created.
pub const OWNER_MARKER: Permissions = Permissions::PRIORITY_SPEAKER;

const MAX_CHANNEL_NAME_LENGTH: usize = 100;

/// Overwrite target for a stored target ID; the guild ID stands for @everyone.
pub fn overwrite_target(target_id: u64, guild_id: u64) -> PermissionOverwriteType {
    if target_id == guild_id {
        PermissionOverwriteType::Role(RoleId::new(target_id))
    } else {
        PermissionOverwriteType::Member(UserId::new(target_id))
    }
}

pub fn to_discord_overwrite(
    target_id: u64,
    overwrite: Overwrite,
    guild_id: u64,
) -> PermissionOverwrite {
    PermissionOverwrite {
        allow: overwrite.allow,
        deny: overwrite.deny,
        kind: overwrite_target(target_id, guild_id),
    }
}

/// Overwrites for a new channel: the owner marker followed by the owner's
/// stored overwrites.
pub fn new_channel_overwrites(
    owner_id: u64,
    stored: &[ChannelPermission],
    guild_id: u64,
) -> Vec<PermissionOverwrite> {
    let owner = PermissionOverwrite {
        allow: OWNER_MARKER | Permissions::CONNECT | Permissions::VIEW_CHANNEL,
        deny: Permissions::empty(),
        kind: PermissionOverwriteType::Member(UserId::new(owner_id)),
    };

    std::iter::once(owner)
        .chain(
            stored
                .iter()
                .filter(|permission| permission.target_id != owner_id)
                .map(|permission| {
                    to_discord_overwrite(permission.target_id, permission.overwrite, guild_id)
                }),
        )
        .collect()
}

/// Member holding the owner marker in a channel's overwrites.
pub fn find_owner(overwrites: &[PermissionOverwrite]) -> Option<u64> {
    overwrites.iter().find_map(|overwrite| match overwrite.kind {
        PermissionOverwriteType::Member(user_id) if overwrite.allow.contains(OWNER_MARKER) => {
            Some(user_id.get())
        }
        _ => None,
    })
}

/// Name for a member's channel, within Discord's length limit.
pub fn channel_name(display_name: &str) -> String {
    display_name.chars().take(MAX_CHANNEL_NAME_LENGTH).collect()
}
