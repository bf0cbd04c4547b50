use std::time::Instant;

use chrono::Utc;
use serenity::all::Message;

use crate::{
    bot::state::BotState,
    model::activity::{ActivityType, TEXT_POINTS},
    service::activity::ActivityService,
};

/// Handles message creation by awarding text activity points.
///
/// Each member earns points at most once per cooldown period.
pub async fn handle_message(state: &BotState, message: Message) {
    if message.author.bot {
        return;
    }

    let member_id = message.author.id.get();
    if !state.message_cooldown.try_acquire(member_id, Instant::now()) {
        return;
    }

    if let Err(e) = ActivityService::new(&state.db)
        .add(member_id, ActivityType::Text, TEXT_POINTS, Utc::now())
        .await
    {
        tracing::error!("Failed to add text activity for {}: {:?}", member_id, e);
    }
}
