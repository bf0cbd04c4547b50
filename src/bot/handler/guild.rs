//! Guild availability handler.
//!
//! When the managed guild becomes available the bot maps its premium, mute and
//! gender roles into the database and caches invite use counts for join
//! attribution. Both catch up on changes missed while the bot was offline.

use serenity::all::{Context, Guild, GuildId};

use crate::{
    bot::state::{BotState, CachedInvite},
    error::AppError,
    service::role::RoleService,
};

/// Handles the guild_create event for the managed guild.
pub async fn handle_guild_create(state: &BotState, ctx: Context, guild: Guild) {
    tracing::debug!(
        "Guild create event: {} ({}) - member_count: {}",
        guild.name,
        guild.id,
        guild.member_count
    );

    let roles: Vec<(u64, String)> = guild
        .roles
        .values()
        .map(|role| (role.id.get(), role.name.clone()))
        .collect();

    match RoleService::new(&state.db).sync_roles(&roles).await {
        Ok(synced) => tracing::info!("Synchronized {} managed roles", synced),
        Err(e) => tracing::error!("Failed to synchronize guild roles: {:?}", e),
    }

    match fetch_invites(&ctx, guild.id).await {
        Ok(invites) => {
            tracing::debug!("Cached {} invites", invites.len());
            state.invites.replace(invites);
        }
        Err(e) => tracing::error!("Failed to fetch guild invites: {:?}", e),
    }
}

/// Current invites of a guild with their use counts.
///
/// Requires the MANAGE_GUILD permission.
pub async fn fetch_invites(ctx: &Context, guild_id: GuildId) -> Result<Vec<CachedInvite>, AppError> {
    let invites = guild_id.invites(&ctx.http).await?;

    Ok(invites
        .into_iter()
        .map(|invite| CachedInvite {
            code: invite.code,
            inviter_id: invite.inviter.map(|user| user.id.get()),
            uses: invite.uses,
        })
        .collect())
}
