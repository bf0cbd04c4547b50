use std::collections::HashMap;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{Cache, GuildId};

use crate::{
    error::AppError,
    model::activity::{ActivityType, VOICE_MIN_MEMBERS, VOICE_POINTS_PER_MINUTE},
    service::activity::ActivityService,
};

/// One member connected to a voice channel.
#[derive(Debug, Clone, Copy)]
pub struct VoicePresence {
    pub channel_id: u64,
    pub member_id: u64,
    pub is_bot: bool,
    pub self_deaf: bool,
}

/// Members earning voice points this minute.
///
/// A member earns points in a channel with at least two human members while
/// not deafened. Deafened members still count toward the channel size.
pub fn eligible_members(presences: &[VoicePresence]) -> Vec<u64> {
    let mut humans_per_channel: HashMap<u64, usize> = HashMap::new();
    for presence in presences.iter().filter(|presence| !presence.is_bot) {
        *humans_per_channel.entry(presence.channel_id).or_default() += 1;
    }

    let mut eligible: Vec<u64> = presences
        .iter()
        .filter(|presence| !presence.is_bot && !presence.self_deaf)
        .filter(|presence| {
            humans_per_channel
                .get(&presence.channel_id)
                .is_some_and(|count| *count >= VOICE_MIN_MEMBERS)
        })
        .map(|presence| presence.member_id)
        .collect();

    eligible.sort_unstable();
    eligible
}

/// Credits voice points to every eligible member of the guild.
///
/// # Returns
/// - `Ok(usize)` - Number of members credited
/// - `Err(AppError)` - Database error
pub async fn process_voice_activity(
    db: &DatabaseConnection,
    discord_cache: &Cache,
    guild_id: GuildId,
) -> Result<usize, AppError> {
    let presences: Vec<VoicePresence> = match discord_cache.guild(guild_id) {
        Some(guild) => guild
            .voice_states
            .values()
            .filter_map(|voice_state| {
                let channel_id = voice_state.channel_id?;
                let is_bot = voice_state
                    .member
                    .as_ref()
                    .map(|member| member.user.bot)
                    .or_else(|| {
                        guild
                            .members
                            .get(&voice_state.user_id)
                            .map(|member| member.user.bot)
                    })
                    .unwrap_or(false);

                Some(VoicePresence {
                    channel_id: channel_id.get(),
                    member_id: voice_state.user_id.get(),
                    is_bot,
                    self_deaf: voice_state.self_deaf,
                })
            })
            .collect(),
        None => {
            tracing::warn!("Guild {} not in cache, skipping voice activity", guild_id);
            return Ok(0);
        }
    };

    let member_ids = eligible_members(&presences);

    let credited = ActivityService::new(db)
        .add_many(
            &member_ids,
            ActivityType::Voice,
            VOICE_POINTS_PER_MINUTE,
            Utc::now(),
        )
        .await?;

    tracing::debug!("Credited voice activity to {} members", credited);

    Ok(credited)
}
