use super::*;

/// Tests ranking order and limit.
///
/// Expected: members ordered by points, ties by ID, cut at the limit
#[tokio::test]
async fn orders_and_limits() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::Activity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = noon();
    let service = ActivityService::new(db);
    service
        .add_many(&[300, 100, 200], ActivityType::Voice, 5, now)
        .await?;
    service.add(200, ActivityType::Text, 1, now).await?;

    let ranking = service.ranking(7, 2, now).await?;

    assert_eq!(ranking.len(), 2);
    assert_eq!((ranking[0].member_id, ranking[0].points), (200, 6));
    assert_eq!((ranking[1].member_id, ranking[1].position), (100, 2));

    Ok(())
}

/// Tests a ranking over the largest period a caller can ask for.
///
/// Expected: Ok, counting points from the capped period
#[tokio::test]
async fn caps_oversized_period() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::Activity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = noon();
    let service = ActivityService::new(db);
    service
        .add(100, ActivityType::Bonus, 3, now - Duration::days(400))
        .await?;

    let ranking = service.ranking(u32::MAX, 10, now).await?;
    let profile = service.profile(100, u32::MAX, now).await?;

    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].points, 3);
    assert_eq!(profile.bonus, 3);

    Ok(())
}
