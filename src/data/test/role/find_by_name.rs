use super::*;

/// Tests that lookups match both name and type.
///
/// Expected: Some for the matching type, None for another type
#[tokio::test]
async fn matches_name_and_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Role)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::role::create_premium_role(db, "zG500").await?;

    let repo = RoleRepository::new(db);

    assert!(repo
        .find_by_name("zG500", RoleType::Premium)
        .await?
        .is_some());
    assert!(repo.find_by_name("zG500", RoleType::Mute).await?.is_none());
    assert!(repo
        .find_by_name("zG1000", RoleType::Premium)
        .await?
        .is_none());

    Ok(())
}
