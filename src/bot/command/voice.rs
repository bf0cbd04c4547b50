//! Voice channel self-management commands.
//!
//! Permission commands change what a target may do in the owner's channels.
//! Inside a member channel the change applies immediately and is stored for
//! the owner's next channel; outside of one it is only stored.

use chrono::Utc;
use poise::{ChoiceParameter, CreateReply};
use serenity::all::{ChannelId, CreateAllowedMentions, EditChannel, GuildId, User};

use crate::{
    bot::{
        channel::{find_owner, overwrite_target, to_discord_overwrite},
        command::{format_expiration, guild_id},
        Context,
    },
    error::{voice::VoiceError, AppError},
    model::channel_permission::{Overwrite, PermissionChange, VoicePermission},
    service::voice::{validate_user_limit, SetPermissionParam, VoiceService},
    util::duration::parse_duration,
};

/// Voice channel the author is connected to, with its owner.
struct MemberChannel {
    channel_id: ChannelId,
    owner_id: u64,
}

/// The author's current voice channel if it is a member channel.
fn member_channel(ctx: Context<'_>) -> Result<Option<MemberChannel>, AppError> {
    let guild = ctx
        .guild()
        .ok_or_else(|| AppError::BadRequest("This command only works in a server".to_string()))?;

    let Some(channel_id) = guild
        .voice_states
        .get(&ctx.author().id)
        .and_then(|voice_state| voice_state.channel_id)
    else {
        return Ok(None);
    };

    let owner_id = ctx
        .data()
        .voice_channels
        .owner_of(channel_id.get())
        .or_else(|| {
            guild
                .channels
                .get(&channel_id)
                .and_then(|channel| find_owner(&channel.permission_overwrites))
        });

    Ok(owner_id.map(|owner_id| MemberChannel {
        channel_id,
        owner_id,
    }))
}

/// Like [`member_channel`], but the author must be connected to one.
fn required_member_channel(ctx: Context<'_>) -> Result<MemberChannel, AppError> {
    member_channel(ctx)?.ok_or_else(|| VoiceError::NotInVoiceChannel.into())
}

async fn apply_overwrite(
    ctx: Context<'_>,
    channel_id: ChannelId,
    guild_id: GuildId,
    target_id: u64,
    overwrite: Overwrite,
) -> Result<(), AppError> {
    if overwrite.is_empty() {
        channel_id
            .delete_permission(ctx.http(), overwrite_target(target_id, guild_id.get()))
            .await?;
    } else {
        channel_id
            .create_permission(
                ctx.http(),
                to_discord_overwrite(target_id, overwrite, guild_id.get()),
            )
            .await?;
    }

    Ok(())
}

async fn change_permission(
    ctx: Context<'_>,
    permission: VoicePermission,
    target: Option<User>,
    change: Option<PermissionChange>,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;
    let actor_id = ctx.author().id.get();

    if permission == VoicePermission::Mod && target.is_none() {
        return Err(AppError::BadRequest(
            "Choose a member to appoint as moderator".to_string(),
        ));
    }

    let channel = member_channel(ctx)?;
    let owner_id = channel
        .as_ref()
        .map(|channel| channel.owner_id)
        .unwrap_or(actor_id);
    let target_id = target
        .as_ref()
        .map(|user| user.id.get())
        .unwrap_or_else(|| guild_id.get());

    let overwrite = VoiceService::new(&ctx.data().db)
        .set_permission(
            SetPermissionParam {
                actor_id,
                owner_id,
                target_id,
                permission,
                change: change.unwrap_or_default(),
            },
            Utc::now(),
        )
        .await?;

    if let Some(channel) = &channel {
        apply_overwrite(ctx, channel.channel_id, guild_id, target_id, overwrite).await?;
    }

    let flag = permission.flag();
    let state = if overwrite.allow.contains(flag) {
        "allowed"
    } else if overwrite.deny.contains(flag) {
        "denied"
    } else {
        "reset to the channel default"
    };
    let target_name = target
        .as_ref()
        .map(|user| user.name.clone())
        .unwrap_or_else(|| "everyone".to_string());
    let scope = if channel.is_some() {
        ""
    } else {
        " It will apply to your next channel."
    };

    ctx.say(format!(
        "`{}` is now {} for {}.{}",
        permission.name(),
        state,
        target_name,
        scope
    ))
    .await?;

    Ok(())
}

/// Allow or deny speaking in your channel
#[poise::command(slash_command, guild_only)]
pub async fn speak(
    ctx: Context<'_>,
    #[description = "Member, everyone by default"] target: Option<User>,
    #[description = "+ to allow, - to deny, toggle by default"] change: Option<PermissionChange>,
) -> Result<(), AppError> {
    change_permission(ctx, VoicePermission::Speak, target, change).await
}

/// Allow or deny joining your channel
#[poise::command(slash_command, guild_only)]
pub async fn connect(
    ctx: Context<'_>,
    #[description = "Member, everyone by default"] target: Option<User>,
    #[description = "+ to allow, - to deny, toggle by default"] change: Option<PermissionChange>,
) -> Result<(), AppError> {
    change_permission(ctx, VoicePermission::Connect, target, change).await
}

/// Show or hide your channel
#[poise::command(slash_command, guild_only)]
pub async fn view(
    ctx: Context<'_>,
    #[description = "Member, everyone by default"] target: Option<User>,
    #[description = "+ to allow, - to deny, toggle by default"] change: Option<PermissionChange>,
) -> Result<(), AppError> {
    change_permission(ctx, VoicePermission::View, target, change).await
}

/// Allow or deny writing in your channel's chat
#[poise::command(slash_command, guild_only)]
pub async fn text(
    ctx: Context<'_>,
    #[description = "Member, everyone by default"] target: Option<User>,
    #[description = "+ to allow, - to deny, toggle by default"] change: Option<PermissionChange>,
) -> Result<(), AppError> {
    change_permission(ctx, VoicePermission::Text, target, change).await
}

/// Allow or deny streaming in your channel
#[poise::command(slash_command, guild_only)]
pub async fn live(
    ctx: Context<'_>,
    #[description = "Member, everyone by default"] target: Option<User>,
    #[description = "+ to allow, - to deny, toggle by default"] change: Option<PermissionChange>,
) -> Result<(), AppError> {
    change_permission(ctx, VoicePermission::Live, target, change).await
}

/// Appoint or dismiss a channel moderator
#[poise::command(slash_command, guild_only, rename = "mod")]
pub async fn moderator(
    ctx: Context<'_>,
    #[description = "Member to appoint or dismiss"] target: User,
    #[description = "+ to appoint, - to dismiss, toggle by default"] change: Option<
        PermissionChange,
    >,
) -> Result<(), AppError> {
    change_permission(ctx, VoicePermission::Mod, Some(target), change).await
}

/// Set how many members may join your channel
#[poise::command(slash_command, guild_only)]
pub async fn limit(
    ctx: Context<'_>,
    #[description = "Maximum members, 0 for no limit"] max_members: u32,
) -> Result<(), AppError> {
    let limit = validate_user_limit(max_members)?;
    let channel = required_member_channel(ctx)?;
    let actor_id = ctx.author().id.get();

    let service = VoiceService::new(&ctx.data().db);
    service.access(channel.owner_id, Utc::now()).await?;
    if actor_id != channel.owner_id && !service.moderators(channel.owner_id).await?.contains(&actor_id)
    {
        return Err(VoiceError::NotChannelOwner.into());
    }

    channel
        .channel_id
        .edit(ctx.http(), EditChannel::new().user_limit(limit))
        .await?;

    ctx.say(match limit {
        0 => "Removed the member limit".to_string(),
        limit => format!("Member limit set to {}", limit),
    })
    .await?;

    Ok(())
}

/// Clear the permissions you set for a member, or all of them
#[poise::command(slash_command, guild_only)]
pub async fn reset(
    ctx: Context<'_>,
    #[description = "Member to reset, everyone you configured by default"] target: Option<User>,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;
    let owner_id = ctx.author().id.get();
    let service = VoiceService::new(&ctx.data().db);

    let target_ids: Vec<u64> = match &target {
        Some(user) => vec![user.id.get()],
        None => service
            .stored_overwrites(owner_id)
            .await?
            .into_iter()
            .map(|stored| stored.target_id)
            .collect(),
    };

    let removed = service
        .reset(owner_id, target.as_ref().map(|user| user.id.get()))
        .await?;

    if let Some(channel) = member_channel(ctx)?.filter(|channel| channel.owner_id == owner_id) {
        for target_id in target_ids {
            if let Err(e) = channel
                .channel_id
                .delete_permission(ctx.http(), overwrite_target(target_id, guild_id.get()))
                .await
            {
                tracing::warn!(
                    "Failed to remove overwrite for {} in {}: {:?}",
                    target_id,
                    channel.channel_id,
                    e
                );
            }
        }
    }

    ctx.say(format!("Removed {} stored permission settings", removed))
        .await?;

    Ok(())
}

/// Show who owns and moderates your current channel
#[poise::command(slash_command, guild_only)]
pub async fn voicechat(ctx: Context<'_>) -> Result<(), AppError> {
    let channel = required_member_channel(ctx)?;
    let service = VoiceService::new(&ctx.data().db);

    let moderators = service.moderators(channel.owner_id).await?;
    let max_mods = service
        .access(channel.owner_id, Utc::now())
        .await
        .map(|access| access.max_mods())
        .unwrap_or(0);
    let stored = service.stored_overwrites(channel.owner_id).await?;

    let moderator_list = if moderators.is_empty() {
        "none".to_string()
    } else {
        moderators
            .iter()
            .map(|id| format!("<@{}>", id))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let content = format!(
        "Owner: <@{}>\nModerators ({}/{}): {}\nStored permission settings: {}",
        channel.owner_id,
        moderators.len(),
        max_mods,
        moderator_list,
        stored.len()
    );

    ctx.send(
        CreateReply::default()
            .content(content)
            .allowed_mentions(CreateAllowedMentions::new()),
    )
    .await?;

    Ok(())
}

/// Let a member use voice commands without premium for a while
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "ADMINISTRATOR",
    required_permissions = "ADMINISTRATOR"
)]
pub async fn bypass(
    ctx: Context<'_>,
    #[description = "Member to grant access"] member: User,
    #[description = "How long, e.g. 12h or 7d"] duration: String,
) -> Result<(), AppError> {
    let duration = parse_duration(&duration)?.ok_or_else(|| {
        AppError::BadRequest("Bypass duration must be longer than zero".to_string())
    })?;

    let updated = VoiceService::new(&ctx.data().db)
        .grant_bypass(member.id.get(), duration, Utc::now())
        .await?;

    ctx.say(format!(
        "{} can use voice commands {}",
        member.name,
        format_expiration(updated.voice_bypass_until)
    ))
    .await?;

    Ok(())
}
