use super::*;

/// Tests clearing every overwrite of one owner.
///
/// Expected: owner's rows removed, other owners untouched
#[tokio::test]
async fn deletes_only_owner_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::ChannelPermission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_member(db).await?;
    let other = factory::create_member(db).await?;
    factory::create_channel_permission(db, &owner.id, "1", Permissions::SPEAK.bits()).await?;
    factory::create_channel_permission(db, &owner.id, "2", Permissions::SPEAK.bits()).await?;
    factory::create_channel_permission(db, &other.id, "1", Permissions::SPEAK.bits()).await?;

    let repo = ChannelPermissionRepository::new(db);
    let removed = repo.delete_by_owner(owner.id.parse().unwrap()).await?;

    assert_eq!(removed, 2);
    assert!(repo.get_by_owner(owner.id.parse().unwrap()).await?.is_empty());
    assert_eq!(repo.get_by_owner(other.id.parse().unwrap()).await?.len(), 1);

    Ok(())
}

/// Tests deleting a single overwrite.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_single_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::ChannelPermission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_member(db).await?;
    factory::create_channel_permission(db, &owner.id, "7", Permissions::STREAM.bits()).await?;
    let owner_id: u64 = owner.id.parse().unwrap();

    let repo = ChannelPermissionRepository::new(db);

    assert!(repo.delete(owner_id, 7).await?);
    assert!(!repo.delete(owner_id, 7).await?);

    Ok(())
}
