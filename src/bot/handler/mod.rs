use std::sync::Arc;

use serenity::all::{
    Context, EventHandler, Guild, GuildId, InviteCreateEvent, InviteDeleteEvent, Member, Message,
    Ready, Role, RoleId, User, VoiceState,
};
use serenity::async_trait;

use crate::bot::state::BotState;

pub mod guild;
pub mod invite;
pub mod member;
pub mod message;
pub mod ready;
pub mod role;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub state: Arc<BotState>,
}

impl Handler {
    pub fn new(state: Arc<BotState>) -> Self {
        Self { state }
    }

    /// Whether an event belongs to the guild the bot manages.
    fn is_managed(&self, guild_id: GuildId) -> bool {
        guild_id.get() == self.state.config.guild_id
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, _is_new: Option<bool>) {
        if self.is_managed(guild.id) {
            guild::handle_guild_create(&self.state, ctx, guild).await;
        }
    }

    /// Called when a role is created in a guild
    async fn guild_role_create(&self, _ctx: Context, new: Role) {
        if self.is_managed(new.guild_id) {
            role::handle_guild_role_upsert(&self.state.db, new).await;
        }
    }

    /// Called when a role is updated in a guild
    async fn guild_role_update(&self, _ctx: Context, _old: Option<Role>, new: Role) {
        if self.is_managed(new.guild_id) {
            role::handle_guild_role_upsert(&self.state.db, new).await;
        }
    }

    /// Called when a role is deleted from a guild
    async fn guild_role_delete(
        &self,
        _ctx: Context,
        guild_id: GuildId,
        removed_role_id: RoleId,
        _removed_role_data_if_in_cache: Option<Role>,
    ) {
        if self.is_managed(guild_id) {
            role::handle_guild_role_delete(&self.state.db, removed_role_id).await;
        }
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        if self.is_managed(new_member.guild_id) {
            member::handle_guild_member_addition(&self.state, ctx, new_member).await;
        }
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        _ctx: Context,
        guild_id: GuildId,
        user: User,
        _member_data_if_available: Option<Member>,
    ) {
        if self.is_managed(guild_id) {
            member::handle_guild_member_removal(user).await;
        }
    }

    /// Called when a message is sent in a channel
    async fn message(&self, _ctx: Context, message: Message) {
        if message.guild_id.is_some_and(|guild_id| self.is_managed(guild_id)) {
            message::handle_message(&self.state, message).await;
        }
    }

    /// Called when a member joins, leaves or moves between voice channels
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        if new.guild_id.is_some_and(|guild_id| self.is_managed(guild_id)) {
            voice::handle_voice_state_update(&self.state, ctx, old, new).await;
        }
    }

    /// Called when an invite is created
    async fn invite_create(&self, _ctx: Context, data: InviteCreateEvent) {
        if data.guild_id.is_some_and(|guild_id| self.is_managed(guild_id)) {
            invite::handle_invite_create(&self.state, data);
        }
    }

    /// Called when an invite is deleted or expires
    async fn invite_delete(&self, _ctx: Context, data: InviteDeleteEvent) {
        if data.guild_id.is_some_and(|guild_id| self.is_managed(guild_id)) {
            invite::handle_invite_delete(&self.state, data);
        }
    }
}
