//! zgdk Test Utils
//!
//! Provides shared testing utilities for the zgdk bot. This crate offers a builder
//! for creating test contexts backed by in-memory SQLite databases, factories for
//! inserting entities with sensible defaults, and helpers for building Serenity
//! objects the way Discord's API would return them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Member;
//!
//! #[tokio::test]
//! async fn test_member_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Member)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
