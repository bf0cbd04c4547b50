//! Discord bot: slash commands and gateway event handlers.
//!
//! Commands are declared with poise and registered in the configured guild on
//! startup. Gateway events go through a serenity `EventHandler`. Both share one
//! [`state::BotState`] holding the database pool and the in-memory caches the
//! bot needs between events.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild, channel and role events
//! - `GUILD_MEMBERS` - Member joins and leaves (privileged intent)
//! - `GUILD_MESSAGES` - Messages for activity points
//! - `GUILD_VOICE_STATES` - Join-to-create channels and voice activity
//! - `GUILD_INVITES` - Invite use tracking
//!
//! `GUILD_MEMBERS` is privileged and must be enabled in the Discord Developer
//! Portal for the bot application.

pub mod channel;
pub mod command;
pub mod handler;
pub mod start;
pub mod state;

use std::sync::Arc;

use crate::{bot::state::BotState, error::AppError};

pub type Context<'a> = poise::Context<'a, Arc<BotState>, AppError>;
pub type Command = poise::Command<Arc<BotState>, AppError>;
