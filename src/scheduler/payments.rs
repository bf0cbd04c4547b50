use sea_orm::DatabaseConnection;

use crate::{
    error::AppError,
    model::payment::PaymentOutcome,
    service::payment::{feed::PaymentFeed, PaymentService},
};

/// Polls the payment feed and logs what was credited.
pub async fn process_payment_feed(
    db: &DatabaseConnection,
    feed: &dyn PaymentFeed,
) -> Result<(), AppError> {
    let outcomes = PaymentService::new(db).poll_feed(feed).await?;

    for outcome in &outcomes {
        match outcome {
            PaymentOutcome::Credited {
                payment,
                member_id,
                balance_after,
            } => tracing::info!(
                payment_id = payment.id,
                member_id,
                amount = payment.amount,
                balance_after,
                "Payment credited"
            ),
            PaymentOutcome::Unassigned { payment } => tracing::warn!(
                payment_id = payment.id,
                name = %payment.name,
                amount = payment.amount,
                "Payment without a member ID needs manual assignment"
            ),
            PaymentOutcome::Duplicate => {}
        }
    }

    Ok(())
}
