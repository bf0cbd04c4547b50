use super::*;

/// Tests crediting a member's wallet.
///
/// Expected: Ok with balance increased by the delta
#[tokio::test]
async fn credits_wallet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .wallet_balance(100)
        .build()
        .await?;
    let member_id: u64 = member.id.parse().unwrap();

    let repo = MemberRepository::new(db);
    let updated = repo.add_balance(member_id, 50).await?;

    assert_eq!(updated.wallet_balance, 150);

    Ok(())
}

/// Tests debiting down to exactly zero.
///
/// Expected: Ok with balance 0
#[tokio::test]
async fn debits_to_zero() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .wallet_balance(40)
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let updated = repo.add_balance(member.id.parse().unwrap(), -40).await?;

    assert_eq!(updated.wallet_balance, 0);

    Ok(())
}

/// Tests that a debit below zero is rejected without writing.
///
/// Expected: Err(NegativeBalance) and the stored balance unchanged
#[tokio::test]
async fn rejects_negative_result() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .wallet_balance(10)
        .build()
        .await?;
    let member_id: u64 = member.id.parse().unwrap();

    let repo = MemberRepository::new(db);
    let result = repo.add_balance(member_id, -11).await;

    assert!(matches!(
        result,
        Err(AppError::EconomyErr(EconomyError::NegativeBalance {
            balance: 10,
            delta: -11
        }))
    ));

    let stored = repo.find_by_id(member_id).await?.unwrap();
    assert_eq!(stored.wallet_balance, 10);

    Ok(())
}

/// Tests crediting a member who has no record yet.
///
/// Expected: Ok with the member created and credited
#[tokio::test]
async fn creates_member_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let updated = repo.add_balance(987654321, 75).await?;

    assert_eq!(updated.id, 987654321);
    assert_eq!(updated.wallet_balance, 75);

    Ok(())
}
