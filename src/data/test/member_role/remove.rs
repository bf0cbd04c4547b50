use super::*;

/// Tests removing an assignment.
///
/// Expected: Ok(true) for the held role, Ok(false) afterwards
#[tokio::test]
async fn removes_assignment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, role, _) = factory::helpers::create_member_with_premium(db, "zG100", 3).await?;
    let member_id: u64 = member.id.parse().unwrap();
    let role_id: u64 = role.id.parse().unwrap();

    let repo = MemberRoleRepository::new(db);

    assert!(repo.remove(member_id, role_id).await?);
    assert!(!repo.remove(member_id, role_id).await?);
    assert!(repo.find(member_id, role_id).await?.is_none());

    Ok(())
}
