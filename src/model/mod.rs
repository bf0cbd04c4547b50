//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! used by services, bot commands and controllers. They carry Discord snowflakes
//! as `u64` and enums instead of stored strings.

pub mod activity;
pub mod api;
pub mod channel_permission;
pub mod gender;
pub mod member;
pub mod member_role;
pub mod moderation;
pub mod payment;
pub mod premium;
pub mod role;
