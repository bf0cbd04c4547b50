use super::*;

/// Tests counting channel moderators of an owner.
///
/// Expected: only allow sets containing MANAGE_MESSAGES are counted
#[tokio::test]
async fn counts_targets_with_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::ChannelPermission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_member(db).await?;
    let other = factory::create_member(db).await?;
    let moderator = (Permissions::MANAGE_MESSAGES | Permissions::SPEAK).bits();

    factory::create_channel_permission(db, &owner.id, "1", moderator).await?;
    factory::create_channel_permission(db, &owner.id, "2", Permissions::MANAGE_MESSAGES.bits())
        .await?;
    factory::create_channel_permission(db, &owner.id, "3", Permissions::SPEAK.bits()).await?;
    factory::channel_permission::ChannelPermissionFactory::new(db, &owner.id, "4")
        .deny(Permissions::MANAGE_MESSAGES.bits())
        .build()
        .await?;
    factory::create_channel_permission(db, &other.id, "1", moderator).await?;

    let repo = ChannelPermissionRepository::new(db);
    let count = repo
        .count_with_flag(owner.id.parse().unwrap(), Permissions::MANAGE_MESSAGES)
        .await?;

    assert_eq!(count, 2);

    Ok(())
}
