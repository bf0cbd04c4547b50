use super::*;

/// Tests polling a feed with new, repeated and invalid entries.
///
/// Expected: invalid entry skipped, duplicate reported, others processed
#[tokio::test]
async fn processes_feed_entries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let feed = StaticPaymentFeed(vec![
        payment("111111111111111111", 10),
        payment("111111111111111111", 10),
        payment("nobody", 0),
        payment("somebody", 15),
    ]);

    let service = PaymentService::new(db);
    let outcomes = service.poll_feed(&feed).await?;

    assert_eq!(outcomes.len(), 3);
    assert!(matches!(outcomes[0], PaymentOutcome::Credited { .. }));
    assert_eq!(outcomes[1], PaymentOutcome::Duplicate);
    assert!(matches!(outcomes[2], PaymentOutcome::Unassigned { .. }));

    Ok(())
}
