use super::*;

/// Tests filtering roles by type.
///
/// Expected: only premium roles returned
#[tokio::test]
async fn returns_only_requested_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Role)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::role::create_premium_role(db, "zG50").await?;
    factory::role::create_premium_role(db, "zG100").await?;
    factory::role::create_typed_role(db, "mute-text", "mute").await?;
    factory::role::create_typed_role(db, "♂", "gender").await?;

    let repo = RoleRepository::new(db);
    let premium = repo.get_by_type(RoleType::Premium).await?;

    assert_eq!(premium.len(), 2);
    assert!(premium
        .iter()
        .all(|role| role.role_type == RoleType::Premium));

    Ok(())
}
