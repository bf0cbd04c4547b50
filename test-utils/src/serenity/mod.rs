//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON,
//! simulating what Discord's API would return.
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_role;
//!
//! let premium = create_test_role(111111111, "zG100", 0xFFD700, 10);
//! ```

pub mod role;

pub use role::create_test_role;
