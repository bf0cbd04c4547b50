//! Shared helper utilities for factory methods.

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Values start well above zero so they read like Discord snowflakes in
/// assertion output and never collide across factories.
pub fn next_id() -> u64 {
    100_000 + COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a member holding the named premium role for `days_left` more days.
///
/// Creates the member, the premium role and the assignment.
///
/// # Returns
/// - `Ok((member, role, member_role))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member_with_premium(
    db: &DatabaseConnection,
    tier_name: &str,
    days_left: i64,
) -> Result<
    (
        entity::member::Model,
        entity::role::Model,
        entity::member_role::Model,
    ),
    DbErr,
> {
    let member = crate::factory::member::create_member(db).await?;
    let role = crate::factory::role::create_premium_role(db, tier_name).await?;
    let member_role = crate::factory::member_role::MemberRoleFactory::new(db, &member.id, &role.id)
        .expiration_date(Some(Utc::now() + Duration::days(days_left)))
        .build()
        .await?;

    Ok((member, role, member_role))
}
