//! Ready event handler.
//!
//! Fired once per gateway connection after authentication. Guild data arrives
//! later through `guild_create`, where roles and invites are synchronized.

use serenity::all::{ActivityData, Context, Ready};

/// Handles the ready event when the bot connects to Discord.
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom("/ask for help")));
}
