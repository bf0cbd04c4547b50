use super::*;

/// Tests that rows before the start day are excluded.
///
/// Expected: only rows on or after the start day for all members
#[tokio::test]
async fn excludes_older_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::Activity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_member(db).await?;
    let second = factory::create_member(db).await?;
    factory::create_activity(db, &first.id, day(1), "text", 10).await?;
    factory::create_activity(db, &first.id, day(5), "text", 4).await?;
    factory::create_activity(db, &second.id, day(5), "voice", 7).await?;
    factory::create_activity(db, &second.id, day(6), "bonus", 2).await?;

    let repo = ActivityRepository::new(db);
    let rows = repo.get_since(day(5)).await?;

    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.date >= day(5)));

    let first_rows = repo
        .get_by_member_since(first.id.parse().unwrap(), day(5))
        .await?;
    assert_eq!(first_rows.len(), 1);
    assert_eq!(first_rows[0].points, 4);

    Ok(())
}
