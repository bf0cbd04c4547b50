use super::*;

/// Tests storing a new overwrite.
///
/// Expected: Ok with allow and deny bits preserved
#[tokio::test]
async fn stores_overwrite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::ChannelPermission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_member(db).await?;
    let owner_id: u64 = owner.id.parse().unwrap();

    let repo = ChannelPermissionRepository::new(db);
    let stored = repo
        .upsert(
            owner_id,
            42,
            Overwrite {
                allow: Permissions::SPEAK | Permissions::STREAM,
                deny: Permissions::CONNECT,
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(stored.target_id, 42);
    assert_eq!(stored.overwrite.allow, Permissions::SPEAK | Permissions::STREAM);
    assert_eq!(stored.overwrite.deny, Permissions::CONNECT);

    Ok(())
}

/// Tests that a second upsert replaces the previous sets.
///
/// Expected: Ok with only the new bits and one stored row
#[tokio::test]
async fn replaces_existing_overwrite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::ChannelPermission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_member(db).await?;
    factory::create_channel_permission(db, &owner.id, "42", Permissions::SPEAK.bits()).await?;
    let owner_id: u64 = owner.id.parse().unwrap();

    let repo = ChannelPermissionRepository::new(db);
    repo.upsert(
        owner_id,
        42,
        Overwrite {
            allow: Permissions::empty(),
            deny: Permissions::SPEAK,
        },
        Utc::now(),
    )
    .await?;

    let all = repo.get_by_owner(owner_id).await?;
    assert_eq!(all.len(), 1);
    assert!(all[0].overwrite.allow.is_empty());
    assert_eq!(all[0].overwrite.deny, Permissions::SPEAK);

    Ok(())
}
