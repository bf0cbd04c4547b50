use super::*;

/// Tests assigning an unassigned payment.
///
/// Expected: Ok with the member set and the payment gone from the unassigned list
#[tokio::test]
async fn assigns_unassigned_payment() -> Result<(), AppError> {
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
    let payment = repo.create(&incoming("no id here", 30), None).await?;

    assert_eq!(repo.get_unassigned(10).await?.len(), 1);

    let assigned = repo.assign_member(payment.id, member_id).await?;

    assert_eq!(assigned.member_id, Some(member_id));
    assert!(repo.get_unassigned(10).await?.is_empty());

    Ok(())
}

/// Tests that an assigned payment cannot be assigned again.
///
/// Expected: Err(PaymentAlreadyAssigned)
#[tokio::test]
async fn rejects_already_assigned() -> Result<(), AppError> {
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
        .create(&incoming(&member.id, 30), Some(member_id))
        .await?;

    let result = repo.assign_member(payment.id, member_id).await;

    assert!(matches!(
        result,
        Err(AppError::EconomyErr(EconomyError::PaymentAlreadyAssigned(id))) if id == payment.id
    ));

    Ok(())
}

/// Tests assigning a payment that does not exist.
///
/// Expected: Err(PaymentNotFound)
#[tokio::test]
async fn fails_for_missing_payment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::HandledPayment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let repo = HandledPaymentRepository::new(db);

    let result = repo.assign_member(999, member.id.parse().unwrap()).await;

    assert!(matches!(
        result,
        Err(AppError::EconomyErr(EconomyError::PaymentNotFound(999)))
    ));

    Ok(())
}
