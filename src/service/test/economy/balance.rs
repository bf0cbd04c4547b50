use super::*;

/// Tests reading the balance of an unknown member.
///
/// Expected: Ok(0) and the member recorded
#[tokio::test]
async fn unknown_member_has_zero_balance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EconomyService::new(db);

    assert_eq!(service.balance(31337).await?, 0);

    Ok(())
}

/// Tests that an admin cannot take more than the member has.
///
/// Expected: Err(NegativeBalance) and balance unchanged
#[tokio::test]
async fn admin_debit_cannot_go_negative() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .wallet_balance(20)
        .build()
        .await?;
    let member_id: u64 = member.id.parse().unwrap();

    let service = EconomyService::new(db);
    let result = service.add_balance(member_id, -21).await;

    assert!(matches!(
        result,
        Err(AppError::EconomyErr(EconomyError::NegativeBalance { .. }))
    ));
    assert_eq!(service.balance(member_id).await?, 20);

    let updated = service.add_balance(member_id, 100).await?;
    assert_eq!(updated.wallet_balance, 120);

    Ok(())
}
