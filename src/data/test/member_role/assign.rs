use super::*;

/// Tests assigning a role with an expiration date.
///
/// Expected: Ok with the assignment stored
#[tokio::test]
async fn assigns_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let role = factory::role::create_premium_role(db, "zG100").await?;
    let member_id: u64 = member.id.parse().unwrap();
    let role_id: u64 = role.id.parse().unwrap();
    let expires = Utc::now() + Duration::days(30);

    let repo = MemberRoleRepository::new(db);
    let assigned = repo.assign(member_id, role_id, Some(expires)).await?;

    assert_eq!(assigned.member_id, member_id);
    assert_eq!(assigned.role_id, role_id);
    assert!(repo.find(member_id, role_id).await?.is_some());

    Ok(())
}

/// Tests that assigning again replaces the expiration date.
///
/// Expected: Ok with the later expiration and no duplicate row
#[tokio::test]
async fn replaces_expiration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, role, _) = factory::helpers::create_member_with_premium(db, "zG50", 5).await?;
    let member_id: u64 = member.id.parse().unwrap();
    let role_id: u64 = role.id.parse().unwrap();
    let later = Utc::now() + Duration::days(35);

    let repo = MemberRoleRepository::new(db);
    repo.assign(member_id, role_id, Some(later)).await?;

    let stored = repo.find(member_id, role_id).await?.unwrap();
    assert!(stored.expiration_date.unwrap() > Utc::now() + Duration::days(34));
    assert_eq!(repo.get_by_member(member_id).await?.len(), 1);

    Ok(())
}

/// Tests a permanent assignment.
///
/// Expected: Ok with no expiration date
#[tokio::test]
async fn assigns_permanent_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let role = factory::role::create_typed_role(db, "mute-text", "mute").await?;

    let repo = MemberRoleRepository::new(db);
    let assigned = repo
        .assign(member.id.parse().unwrap(), role.id.parse().unwrap(), None)
        .await?;

    assert!(assigned.expiration_date.is_none());
    assert!(!assigned.is_expired(Utc::now()));

    Ok(())
}
