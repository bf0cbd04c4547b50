//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories insert into the database; foreign key targets must exist.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::create_member(&db).await?;
//! let rich = factory::member::MemberFactory::new(&db)
//!     .wallet_balance(1_000)
//!     .build()
//!     .await?;
//! let role = factory::role::create_premium_role(&db, "zG100").await?;
//! factory::create_member_role(&db, &member.id, &role.id).await?;
//! ```

pub mod activity;
pub mod channel_permission;
pub mod handled_payment;
pub mod helpers;
pub mod member;
pub mod member_role;
pub mod role;

pub use activity::create_activity;
pub use channel_permission::create_channel_permission;
pub use handled_payment::create_handled_payment;
pub use member::{create_member, create_member_with_id};
pub use member_role::create_member_role;
pub use role::create_role;
