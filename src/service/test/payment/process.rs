use super::*;

/// Tests a payment whose name carries a Discord ID.
///
/// Expected: Ok(Credited) with the wallet credited
#[tokio::test]
async fn credits_identified_payer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .id("960665311701528596")
        .wallet_balance(5)
        .build()
        .await?;

    let service = PaymentService::new(db);
    let outcome = service
        .process(&payment(&format!("ID: {} thanks!", member.id), 100))
        .await?;

    match outcome {
        PaymentOutcome::Credited {
            member_id,
            balance_after,
            payment,
        } => {
            assert_eq!(member_id, 960665311701528596);
            assert_eq!(balance_after, 105);
            assert_eq!(payment.member_id, Some(960665311701528596));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    Ok(())
}

/// Tests a payment without a recognizable Discord ID.
///
/// Expected: Ok(Unassigned) and the payment listed as unassigned
#[tokio::test]
async fn records_unidentified_payment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PaymentService::new(db);
    let outcome = service.process(&payment("john", 20)).await?;

    assert!(matches!(outcome, PaymentOutcome::Unassigned { .. }));
    assert_eq!(service.unassigned(10).await?.len(), 1);

    Ok(())
}

/// Tests processing the same payment twice.
///
/// Expected: Ok(Duplicate) the second time and the wallet credited once
#[tokio::test]
async fn ignores_duplicate_payment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let incoming = payment("123456789012345678", 50);
    let service = PaymentService::new(db);

    service.process(&incoming).await?;
    let second = service.process(&incoming).await?;

    assert_eq!(second, PaymentOutcome::Duplicate);
    assert_eq!(
        EconomyService::new(db).balance(123456789012345678).await?,
        50
    );

    Ok(())
}
