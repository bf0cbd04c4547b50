use super::*;

/// Tests that expired premium roles do not count.
///
/// Expected: None for an expired role, the tier for an active one
#[tokio::test]
async fn ignores_expired_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (expired, _, _) = factory::helpers::create_member_with_premium(db, "zG1000", -1).await?;
    let (active, _, _) = factory::helpers::create_member_with_premium(db, "zG50", 1).await?;

    let service = PremiumService::new(db);
    let now = Utc::now();

    assert!(service
        .active_tier(expired.id.parse().unwrap(), now)
        .await?
        .is_none());
    assert_eq!(
        service
            .active_tier(active.id.parse().unwrap(), now)
            .await?
            .map(|active| active.tier.name),
        Some("zG50")
    );

    Ok(())
}
