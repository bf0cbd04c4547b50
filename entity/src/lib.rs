//! SeaORM entity definitions for the zgdk database schema.
//!
//! Discord snowflakes (member, role and channel ids) are stored as `TEXT` and
//! parsed into `u64` by the repositories in the main crate.

pub mod prelude;

pub mod activity;
pub mod channel_permission;
pub mod handled_payment;
pub mod member;
pub mod member_role;
pub mod role;
