//! Join-to-create voice channels.
//!
//! Joining the configured creation channel gives the member a personal voice
//! channel next to it, carrying the overwrites the member stored with the voice
//! commands. Personal channels are deleted once the last member leaves.

use serenity::all::{ChannelId, ChannelType, Context, CreateChannel, GuildId, VoiceState};

use crate::{
    bot::{
        channel::{channel_name, find_owner, new_channel_overwrites},
        state::BotState,
    },
    error::AppError,
    service::voice::VoiceService,
};

/// Handles the voice_state_update event.
pub async fn handle_voice_state_update(
    state: &BotState,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(guild_id) = new.guild_id else {
        return;
    };

    let old_channel = old.and_then(|old| old.channel_id);
    // mute, deafen and stream toggles
    if old_channel == new.channel_id {
        return;
    }

    let create_channel_id = state.config.create_voice_channel_id.map(ChannelId::new);
    if new.channel_id.is_some() && new.channel_id == create_channel_id {
        if let Err(e) = create_member_channel(state, &ctx, guild_id, &new).await {
            tracing::error!(
                "Failed to create voice channel for {}: {:?}",
                new.user_id,
                e
            );
        }
    }

    if let Some(channel_id) = old_channel {
        if let Err(e) = delete_if_empty(state, &ctx, guild_id, channel_id).await {
            tracing::error!("Failed to delete empty voice channel {}: {:?}", channel_id, e);
        }
    }
}

async fn create_member_channel(
    state: &BotState,
    ctx: &Context,
    guild_id: GuildId,
    voice_state: &VoiceState,
) -> Result<(), AppError> {
    let owner_id = voice_state.user_id.get();
    let display_name = voice_state
        .member
        .as_ref()
        .map(|member| member.display_name().to_string())
        .unwrap_or_else(|| owner_id.to_string());

    let parent_id = voice_state.channel_id.and_then(|create_channel_id| {
        ctx.cache.guild(guild_id).and_then(|guild| {
            guild
                .channels
                .get(&create_channel_id)
                .and_then(|channel| channel.parent_id)
        })
    });

    let stored = VoiceService::new(&state.db)
        .stored_overwrites(owner_id)
        .await?;

    let mut builder = CreateChannel::new(channel_name(&display_name))
        .kind(ChannelType::Voice)
        .permissions(new_channel_overwrites(owner_id, &stored, guild_id.get()));
    if let Some(parent_id) = parent_id {
        builder = builder.category(parent_id);
    }

    let channel = guild_id.create_channel(ctx, builder).await?;
    state.voice_channels.register(channel.id.get(), owner_id);

    tracing::info!(
        owner_id,
        channel_id = channel.id.get(),
        overwrites = stored.len(),
        "Created voice channel"
    );

    if let Err(e) = guild_id.move_member(ctx, voice_state.user_id, channel.id).await {
        // member left the creation channel before the move
        state.voice_channels.unregister(channel.id.get());
        channel.id.delete(ctx).await?;
        return Err(e.into());
    }

    Ok(())
}

/// Deletes a member channel nobody is connected to anymore.
async fn delete_if_empty(
    state: &BotState,
    ctx: &Context,
    guild_id: GuildId,
    channel_id: ChannelId,
) -> Result<(), AppError> {
    if !is_member_channel(state, ctx, guild_id, channel_id) {
        return Ok(());
    }

    let occupied = ctx
        .cache
        .guild(guild_id)
        .map(|guild| {
            guild
                .voice_states
                .values()
                .any(|voice_state| voice_state.channel_id == Some(channel_id))
        })
        .unwrap_or(true);
    if occupied {
        return Ok(());
    }

    state.voice_channels.unregister(channel_id.get());
    channel_id.delete(ctx).await?;

    tracing::info!(channel_id = channel_id.get(), "Deleted empty voice channel");

    Ok(())
}

/// Whether the bot created the channel for a member.
///
/// Channels created before a restart are not in the registry; they are
/// recognized by the owner marker and their place next to the creation channel.
fn is_member_channel(
    state: &BotState,
    ctx: &Context,
    guild_id: GuildId,
    channel_id: ChannelId,
) -> bool {
    if state.voice_channels.owner_of(channel_id.get()).is_some() {
        return true;
    }

    let Some(create_channel_id) = state.config.create_voice_channel_id.map(ChannelId::new) else {
        return false;
    };
    if channel_id == create_channel_id {
        return false;
    }

    let Some(guild) = ctx.cache.guild(guild_id) else {
        return false;
    };
    let (Some(channel), Some(create_channel)) = (
        guild.channels.get(&channel_id),
        guild.channels.get(&create_channel_id),
    ) else {
        return false;
    };

    channel.kind == ChannelType::Voice
        && channel.parent_id == create_channel.parent_id
        && find_owner(&channel.permission_overwrites).is_some()
}
