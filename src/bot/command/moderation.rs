use chrono::{Duration, Utc};
use serenity::all::{EditMember, GetMessages, MessageId, RoleId, User};

use crate::{
    bot::{
        command::{format_expiration, guild_id, to_discord_timestamp},
        Context,
    },
    error::AppError,
    model::moderation::{MuteKind, NICK_MUTE_NICKNAME},
    service::moderation::{timeout_until, validate_clear_amount, ModerationService, MAX_CLEAR_AMOUNT},
    util::duration::{format_duration, parse_duration},
};

/// Discord refuses to bulk delete messages older than this.
const BULK_DELETE_MAX_AGE_DAYS: i64 = 14;

/// Restrict a member with a mute role
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "MODERATE_MEMBERS",
    required_permissions = "MODERATE_MEMBERS",
    required_bot_permissions = "MANAGE_ROLES"
)]
pub async fn mute(
    ctx: Context<'_>,
    #[description = "Member to mute"] member: User,
    #[description = "What to restrict"] kind: MuteKind,
    #[description = "How long, e.g. 30m or 1d12h; permanent by default"] duration: Option<String>,
    #[description = "Reason for the audit log"] reason: Option<String>,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;
    let duration = duration.as_deref().map(parse_duration).transpose()?.flatten();
    let reason = reason.unwrap_or_else(|| format!("Muted by {}", ctx.author().name));

    let service = ModerationService::new(&ctx.data().db);
    let outcome = service
        .mute(member.id.get(), kind, duration, Utc::now())
        .await?;

    if let Err(e) = ctx
        .http()
        .add_member_role(guild_id, member.id, RoleId::new(outcome.role_id), Some(&reason))
        .await
    {
        if let Err(revert_err) = service.revert_mute(member.id.get(), &outcome).await {
            tracing::error!(
                "Failed to revert mute of {} after Discord error: {:?}",
                member.id,
                revert_err
            );
        }
        return Err(e.into());
    }

    if kind == MuteKind::Nick {
        guild_id
            .edit_member(
                ctx.http(),
                member.id,
                EditMember::new()
                    .nickname(NICK_MUTE_NICKNAME)
                    .audit_log_reason(&reason),
            )
            .await?;
    }

    ctx.say(format!(
        "Muted {} ({}) {}",
        member.name,
        kind.role_name(),
        format_expiration(outcome.expiration_date)
    ))
    .await?;

    Ok(())
}

/// Lift a mute
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "MODERATE_MEMBERS",
    required_permissions = "MODERATE_MEMBERS",
    required_bot_permissions = "MANAGE_ROLES"
)]
pub async fn unmute(
    ctx: Context<'_>,
    #[description = "Member to unmute"] member: User,
    #[description = "Restriction to lift"] kind: MuteKind,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;
    let reason = format!("Unmuted by {}", ctx.author().name);

    let role_id = ModerationService::new(&ctx.data().db)
        .unmute(member.id.get(), kind)
        .await?;

    ctx.http()
        .remove_member_role(guild_id, member.id, RoleId::new(role_id), Some(&reason))
        .await?;

    if kind == MuteKind::Nick {
        // an empty nickname resets it
        guild_id
            .edit_member(
                ctx.http(),
                member.id,
                EditMember::new().nickname("").audit_log_reason(&reason),
            )
            .await?;
    }

    ctx.say(format!("Unmuted {} ({})", member.name, kind.role_name()))
        .await?;

    Ok(())
}

/// List a member's active mutes
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "MODERATE_MEMBERS",
    required_permissions = "MODERATE_MEMBERS"
)]
pub async fn mutes(
    ctx: Context<'_>,
    #[description = "Member to check"] member: User,
) -> Result<(), AppError> {
    let mutes = ModerationService::new(&ctx.data().db)
        .mutes(member.id.get(), Utc::now())
        .await?;

    let content = if mutes.is_empty() {
        format!("{} has no active mutes", member.name)
    } else {
        mutes
            .iter()
            .map(|(kind, expiration_date)| {
                format!("{} {}", kind.role_name(), format_expiration(*expiration_date))
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    ctx.say(content).await?;

    Ok(())
}

/// Time out a member
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "MODERATE_MEMBERS",
    required_permissions = "MODERATE_MEMBERS",
    required_bot_permissions = "MODERATE_MEMBERS"
)]
pub async fn timeout(
    ctx: Context<'_>,
    #[description = "Member to time out"] member: User,
    #[description = "How long, e.g. 10m or 1d; at most 28 days"] duration: String,
    #[description = "Reason for the audit log"] reason: Option<String>,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;
    let duration = parse_duration(&duration)?;
    let until = timeout_until(duration, Utc::now())?;
    let reason = reason.unwrap_or_else(|| format!("Timed out by {}", ctx.author().name));

    guild_id
        .edit_member(
            ctx.http(),
            member.id,
            EditMember::new()
                .disable_communication_until_datetime(to_discord_timestamp(until)?)
                .audit_log_reason(&reason),
        )
        .await?;

    tracing::info!(
        moderator_id = ctx.author().id.get(),
        member_id = member.id.get(),
        "Member timed out for {}",
        format_duration(until - Utc::now())
    );

    ctx.say(format!(
        "Timed out {} {}",
        member.name,
        format_expiration(Some(until))
    ))
    .await?;

    Ok(())
}

/// Delete recent messages in this channel
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "MANAGE_MESSAGES",
    required_permissions = "MANAGE_MESSAGES",
    required_bot_permissions = "MANAGE_MESSAGES"
)]
pub async fn clear(
    ctx: Context<'_>,
    #[description = "Messages to delete, at most 100"] amount: u32,
    #[description = "Only delete messages from this member"] member: Option<User>,
) -> Result<(), AppError> {
    let amount = validate_clear_amount(amount)?;
    ctx.defer_ephemeral().await?;

    let channel_id = ctx.channel_id();
    let fetch_limit = if member.is_some() {
        MAX_CLEAR_AMOUNT as u8
    } else {
        amount
    };
    let messages = channel_id
        .messages(ctx.http(), GetMessages::new().limit(fetch_limit))
        .await?;

    let cutoff = (Utc::now() - Duration::days(BULK_DELETE_MAX_AGE_DAYS)).timestamp();
    let message_ids: Vec<MessageId> = messages
        .iter()
        .filter(|message| {
            member
                .as_ref()
                .is_none_or(|user| message.author.id == user.id)
        })
        .filter(|message| message.timestamp.unix_timestamp() > cutoff)
        .take(usize::from(amount))
        .map(|message| message.id)
        .collect();

    match message_ids.as_slice() {
        [] => {}
        [message_id] => channel_id.delete_message(ctx.http(), *message_id).await?,
        message_ids => channel_id.delete_messages(ctx.http(), message_ids).await?,
    }

    ctx.say(format!("Deleted {} messages", message_ids.len()))
        .await?;

    Ok(())
}
