use super::*;

/// Tests that points for the same day and type accumulate.
///
/// Expected: Ok with the sum of both additions
#[tokio::test]
async fn accumulates_points() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::Activity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let member_id: u64 = member.id.parse().unwrap();

    let repo = ActivityRepository::new(db);
    repo.add_points(member_id, day(1), ActivityType::Voice, 5)
        .await?;
    let row = repo
        .add_points(member_id, day(1), ActivityType::Voice, 3)
        .await?;

    assert_eq!(row.points, 8);

    Ok(())
}

/// Tests that different types and days are kept apart.
///
/// Expected: three separate rows
#[tokio::test]
async fn separates_types_and_days() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::Activity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let member_id: u64 = member.id.parse().unwrap();

    let repo = ActivityRepository::new(db);
    repo.add_points(member_id, day(1), ActivityType::Text, 1)
        .await?;
    repo.add_points(member_id, day(1), ActivityType::Voice, 1)
        .await?;
    repo.add_points(member_id, day(2), ActivityType::Text, 1)
        .await?;

    let rows = repo.get_by_member_since(member_id, day(1)).await?;
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.points == 1));

    Ok(())
}
