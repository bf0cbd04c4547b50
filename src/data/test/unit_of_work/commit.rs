use super::*;

/// Tests that committed changes are visible afterwards.
///
/// Expected: balance updated outside the transaction
#[tokio::test]
async fn commit_persists_changes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let member_id: u64 = member.id.parse().unwrap();

    let uow = UnitOfWork::begin(db).await?;
    uow.members().add_balance(member_id, 70).await?;
    uow.commit().await?;

    let stored = MemberRepository::new(db).find_by_id(member_id).await?.unwrap();
    assert_eq!(stored.wallet_balance, 70);

    Ok(())
}

/// Tests that rolled back changes are discarded.
///
/// Expected: balance unchanged after rollback
#[tokio::test]
async fn rollback_discards_changes() -> Result<(), AppError> {
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

    let uow = UnitOfWork::begin(db).await?;
    uow.members().add_balance(member_id, 500).await?;
    uow.rollback().await?;

    let stored = MemberRepository::new(db).find_by_id(member_id).await?.unwrap();
    assert_eq!(stored.wallet_balance, 10);

    Ok(())
}

/// Tests that dropping an uncommitted unit of work discards its changes.
///
/// Expected: balance unchanged after the unit of work goes out of scope
#[tokio::test]
async fn drop_discards_changes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let member_id: u64 = member.id.parse().unwrap();

    {
        let uow = UnitOfWork::begin(db).await?;
        uow.members().add_balance(member_id, 5).await?;
    }

    let stored = MemberRepository::new(db).find_by_id(member_id).await?.unwrap();
    assert_eq!(stored.wallet_balance, 0);

    Ok(())
}
