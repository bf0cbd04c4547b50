//! Slash commands, grouped by concern.
//!
//! Commands parse Discord input, call a service and apply the returned outcome
//! through serenity. Errors bubble up as `AppError` and are answered by
//! [`on_error`] with the error's user-facing message.

pub mod activity;
pub mod economy;
pub mod gender;
pub mod invites;
pub mod moderation;
pub mod payments;
pub mod shop;
pub mod support;
pub mod voice;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serenity::all::{GuildId, Timestamp};

use crate::{
    bot::{state::BotState, Command, Context},
    error::{internal::InternalError, AppError},
};

/// Every command the bot registers.
pub fn commands() -> Vec<Command> {
    vec![
        economy::balance(),
        economy::add_balance(),
        economy::transfer(),
        shop::shop(),
        shop::buy(),
        voice::speak(),
        voice::connect(),
        voice::view(),
        voice::text(),
        voice::live(),
        voice::moderator(),
        voice::limit(),
        voice::reset(),
        voice::voicechat(),
        voice::bypass(),
        activity::profile(),
        activity::ranking(),
        activity::bonus(),
        moderation::mute(),
        moderation::unmute(),
        moderation::mutes(),
        moderation::timeout(),
        moderation::clear(),
        gender::gender(),
        invites::invites(),
        payments::payments(),
        support::ask(),
    ]
}

/// Answers a failed command with the error's user-facing message.
///
/// Rule violations are logged at debug level; anything else is logged as an
/// error and replaced by a generic message.
pub async fn on_error(error: poise::FrameworkError<'_, Arc<BotState>, AppError>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            let command = &ctx.command().qualified_name;
            if error.is_user_error() {
                tracing::debug!("Command {} rejected: {}", command, error);
            } else {
                tracing::error!("Command {} failed: {:?}", command, error);
            }

            let reply = poise::CreateReply::default()
                .content(error.user_message())
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                tracing::error!("Failed to send error reply: {:?}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Failed to handle framework error: {:?}", e);
            }
        }
    }
}

/// Guild the command runs in.
fn guild_id(ctx: Context<'_>) -> Result<GuildId, AppError> {
    ctx.guild_id()
        .ok_or_else(|| AppError::BadRequest("This command only works in a server".to_string()))
}

fn to_discord_timestamp(time: DateTime<Utc>) -> Result<Timestamp, AppError> {
    Timestamp::from_unix_timestamp(time.timestamp()).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp: time.timestamp(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Human readable expiration, `permanent` when there is none.
fn format_expiration(expiration_date: Option<DateTime<Utc>>) -> String {
    match expiration_date {
        Some(expires) => format!("until <t:{}:f>", expires.timestamp()),
        None => "permanently".to_string(),
    }
}
