use super::*;

/// Tests duplicate detection on name, amount and time.
///
/// Expected: true only for an exact match
#[tokio::test]
async fn matches_all_three_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::HandledPayment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let payment = incoming("someone", 50);
    factory::create_handled_payment(db, None, &payment.name, payment.amount, payment.paid_at)
        .await?;

    let repo = HandledPaymentRepository::new(db);

    assert!(repo.exists("someone", 50, payment.paid_at).await?);
    assert!(!repo.exists("someone", 51, payment.paid_at).await?);
    assert!(!repo.exists("someone else", 50, payment.paid_at).await?);
    assert!(
        !repo
            .exists("someone", 50, payment.paid_at + chrono::Duration::seconds(1))
            .await?
    );

    Ok(())
}
