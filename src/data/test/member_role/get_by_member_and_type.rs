use super::*;

/// Tests fetching a member's roles of a single type.
///
/// Expected: only the premium role among premium and mute assignments
#[tokio::test]
async fn filters_by_role_type() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, premium, _) =
        factory::helpers::create_member_with_premium(db, "zG500", 10).await?;
    let mute = factory::role::create_typed_role(db, "mute-image", "mute").await?;
    factory::create_member_role(db, &member.id, &mute.id).await?;

    let repo = MemberRoleRepository::new(db);
    let member_id: u64 = member.id.parse().unwrap();

    let roles = repo
        .get_by_member_and_type(member_id, RoleType::Premium)
        .await?;
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].role.id, premium.id.parse::<u64>().unwrap());
    assert_eq!(roles[0].role.name, "zG500");

    assert_eq!(repo.get_by_member(member_id).await?.len(), 2);

    Ok(())
}

/// Tests that other members' roles are excluded.
///
/// Expected: empty list for a member without roles
#[tokio::test]
async fn excludes_other_members() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_member_with_premium(db, "zG100", 10).await?;
    let other = factory::create_member(db).await?;

    let repo = MemberRoleRepository::new(db);
    let roles = repo
        .get_by_member_and_type(other.id.parse().unwrap(), RoleType::Premium)
        .await?;

    assert!(roles.is_empty());

    Ok(())
}
