use super::*;

/// Tests deleting a stored role and a missing one.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Role)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::create_role(db).await?;
    let role_id: u64 = role.id.parse().unwrap();

    let repo = RoleRepository::new(db);

    assert!(repo.delete(role_id).await?);
    assert!(!repo.delete(role_id).await?);
    assert!(repo.find_by_id(role_id).await?.is_none());

    Ok(())
}
