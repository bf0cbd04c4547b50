//! Business logic layer.
//!
//! Services validate rules and persist state through the repositories. Discord
//! side effects (adding roles, editing channel overwrites) are not performed
//! here; services return outcomes the bot layer applies with serenity.

pub mod activity;
pub mod agent;
pub mod economy;
pub mod gender;
pub mod member;
pub mod moderation;
pub mod payment;
pub mod premium;
pub mod role;
pub mod voice;

#[cfg(test)]
mod test;
