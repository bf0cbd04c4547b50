use super::*;

/// Tests syncing a guild's roles.
///
/// Expected: only managed roles stored, with their types
#[tokio::test]
async fn stores_managed_roles_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Role)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild_roles = vec![
        (1, "@everyone".to_string()),
        (2, "zG100".to_string()),
        (3, "mute-text".to_string()),
        (4, "♂".to_string()),
        (5, "Moderator".to_string()),
    ];

    let synced = RoleService::new(db).sync_roles(&guild_roles).await?;

    assert_eq!(synced, 3);
    let repo = RoleRepository::new(db);
    assert_eq!(repo.get_by_type(RoleType::Premium).await?.len(), 1);
    assert_eq!(repo.get_by_type(RoleType::Mute).await?.len(), 1);
    assert_eq!(repo.get_by_type(RoleType::Gender).await?.len(), 1);
    assert!(repo.find_by_id(5).await?.is_none());

    Ok(())
}

/// Tests renaming a managed role to an unmanaged name.
///
/// Expected: the role is forgotten
#[tokio::test]
async fn forgets_role_renamed_away() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Role)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RoleService::new(db);
    service.upsert_role(9, "zG500").await?;
    assert!(RoleRepository::new(db).find_by_id(9).await?.is_some());

    service.upsert_role(9, "VIP").await?;
    assert!(RoleRepository::new(db).find_by_id(9).await?.is_none());

    Ok(())
}
