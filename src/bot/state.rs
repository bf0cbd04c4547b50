//! State shared by bot commands, event handlers and scheduled jobs.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    model::activity::TEXT_COOLDOWN_SECONDS,
    service::{activity::MessageCooldown, agent::AgentService},
};

pub struct BotState {
    pub db: DatabaseConnection,
    pub config: Config,
    pub agent: AgentService,
    pub invites: InviteCache,
    pub voice_channels: VoiceChannelRegistry,
    pub message_cooldown: MessageCooldown,
}

impl BotState {
    pub fn new(db: DatabaseConnection, config: Config, agent: AgentService) -> Self {
        Self {
            db,
            config,
            agent,
            invites: InviteCache::default(),
            voice_channels: VoiceChannelRegistry::default(),
            message_cooldown: MessageCooldown::new(Duration::from_secs(TEXT_COOLDOWN_SECONDS)),
        }
    }
}

/// Use count of one guild invite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedInvite {
    pub code: String,
    pub inviter_id: Option<u64>,
    pub uses: u64,
}

/// Last known invite use counts of the managed guild.
///
/// Discord does not say which invite a member used, so the bot compares use
/// counts before and after each join.
#[derive(Default)]
pub struct InviteCache {
    invites: Mutex<HashMap<String, CachedInvite>>,
}

impl InviteCache {
    pub fn replace(&self, invites: Vec<CachedInvite>) {
        if let Ok(mut cached) = self.invites.lock() {
            *cached = index_by_code(invites);
        }
    }

    pub fn insert(&self, invite: CachedInvite) {
        if let Ok(mut cached) = self.invites.lock() {
            cached.insert(invite.code.clone(), invite);
        }
    }

    pub fn remove(&self, code: &str) {
        if let Ok(mut cached) = self.invites.lock() {
            cached.remove(code);
        }
    }

    /// Stores `fresh` and returns the inviter of the invite a join consumed.
    ///
    /// The used invite is the single one whose use count grew. When none grew,
    /// a single invite that disappeared is taken instead, since Discord deletes
    /// invites that reach their maximum uses. Ambiguous cases yield `None`.
    pub fn detect_used(&self, fresh: Vec<CachedInvite>) -> Option<u64> {
        let Ok(mut cached) = self.invites.lock() else {
            return None;
        };

        let fresh = index_by_code(fresh);
        let inviter = find_used_invite(&cached, &fresh);
        *cached = fresh;

        inviter
    }
}

fn index_by_code(invites: Vec<CachedInvite>) -> HashMap<String, CachedInvite> {
    invites
        .into_iter()
        .map(|invite| (invite.code.clone(), invite))
        .collect()
}

fn find_used_invite(
    before: &HashMap<String, CachedInvite>,
    after: &HashMap<String, CachedInvite>,
) -> Option<u64> {
    let grown: Vec<&CachedInvite> = after
        .values()
        .filter(|invite| {
            let previous = before.get(&invite.code).map(|old| old.uses).unwrap_or(0);
            invite.uses > previous
        })
        .collect();

    if let [used] = grown.as_slice() {
        return used.inviter_id;
    }
    if !grown.is_empty() {
        return None;
    }

    let vanished: Vec<&CachedInvite> = before
        .values()
        .filter(|invite| !after.contains_key(&invite.code))
        .collect();

    match vanished.as_slice() {
        [used] => used.inviter_id,
        _ => None,
    }
}

/// Voice channels the bot created, mapped to their owner.
#[derive(Default)]
pub struct VoiceChannelRegistry {
    channels: Mutex<HashMap<u64, u64>>,
}

impl VoiceChannelRegistry {
    pub fn register(&self, channel_id: u64, owner_id: u64) {
        if let Ok(mut channels) = self.channels.lock() {
            channels.insert(channel_id, owner_id);
        }
    }

    /// Forgets a channel, returning its owner if it was registered.
    pub fn unregister(&self, channel_id: u64) -> Option<u64> {
        self.channels
            .lock()
            .ok()
            .and_then(|mut channels| channels.remove(&channel_id))
    }

    pub fn owner_of(&self, channel_id: u64) -> Option<u64> {
        self.channels
            .lock()
            .ok()
            .and_then(|channels| channels.get(&channel_id).copied())
    }
}
