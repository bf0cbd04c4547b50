use super::*;

/// Tests recording a payment credited to a member.
///
/// Expected: Ok with an assigned ID and the member set
#[tokio::test]
async fn records_assigned_payment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::HandledPayment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let member_id: u64 = member.id.parse().unwrap();

    let repo = HandledPaymentRepository::new(db);
    let payment = repo
        .create(&incoming(&member.id, 100), Some(member_id))
        .await?;

    assert!(payment.id > 0);
    assert_eq!(payment.member_id, Some(member_id));
    assert_eq!(payment.amount, 100);

    Ok(())
}
