use super::*;

/// Tests a profile summing points per type within the period.
///
/// Expected: totals per type, overall total and rank 1 for the top member
#[tokio::test]
async fn sums_points_per_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::Activity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let other = factory::create_member(db).await?;
    let member_id: u64 = member.id.parse().unwrap();
    let now = noon();

    let service = ActivityService::new(db);
    service.add(member_id, ActivityType::Text, 3, now).await?;
    service.add(member_id, ActivityType::Text, 2, now).await?;
    service
        .add(member_id, ActivityType::Voice, 10, now - Duration::days(2))
        .await?;
    service
        .add(member_id, ActivityType::Bonus, 100, now - Duration::days(40))
        .await?;
    service
        .add(other.id.parse().unwrap(), ActivityType::Voice, 4, now)
        .await?;

    let profile = service.profile(member_id, 30, now).await?;

    assert_eq!(profile.text, 5);
    assert_eq!(profile.voice, 10);
    assert_eq!(profile.bonus, 0);
    assert_eq!(profile.total, 15);
    assert_eq!(profile.rank, Some(1));

    Ok(())
}

/// Tests a profile for a member without points.
///
/// Expected: zero totals and no rank
#[tokio::test]
async fn empty_profile_has_no_rank() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::Activity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = ActivityService::new(db).profile(42, 7, noon()).await?;

    assert_eq!(profile.total, 0);
    assert_eq!(profile.rank, None);

    Ok(())
}
