use super::*;

/// Tests that only assignments past their expiration are returned.
///
/// Expected: the expired assignment only, not the active or permanent ones
#[tokio::test]
async fn returns_only_expired() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let role = factory::role::create_premium_role(db, "zG50").await?;
    let expired = factory::create_member(db).await?;
    let active = factory::create_member(db).await?;
    let permanent = factory::create_member(db).await?;

    factory::member_role::MemberRoleFactory::new(db, &expired.id, &role.id)
        .expiration_date(Some(now - Duration::minutes(1)))
        .build()
        .await?;
    factory::member_role::MemberRoleFactory::new(db, &active.id, &role.id)
        .expiration_date(Some(now + Duration::days(1)))
        .build()
        .await?;
    factory::create_member_role(db, &permanent.id, &role.id).await?;

    let repo = MemberRoleRepository::new(db);
    let result = repo.get_expired(now).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].member_id, expired.id.parse::<u64>().unwrap());

    Ok(())
}
