use serenity::all::{InviteCreateEvent, InviteDeleteEvent};

use crate::bot::state::{BotState, CachedInvite};

/// Handles the invite_create event by caching the new invite.
pub fn handle_invite_create(state: &BotState, data: InviteCreateEvent) {
    tracing::debug!("Invite {} created", data.code);

    state.invites.insert(CachedInvite {
        code: data.code,
        inviter_id: data.inviter.map(|user| user.id.get()),
        uses: data.uses,
    });
}

/// Handles the invite_delete event.
pub fn handle_invite_delete(state: &BotState, data: InviteDeleteEvent) {
    tracing::debug!("Invite {} deleted", data.code);

    state.invites.remove(&data.code);
}
