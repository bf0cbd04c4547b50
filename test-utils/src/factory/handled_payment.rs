//! Factory for creating handled payment ledger rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a handled payment row.
///
/// # Arguments
/// - `db` - Database connection
/// - `member_id` - Member credited, or `None` for an unassigned payment
/// - `name` - Name the payer entered
/// - `amount` - Amount paid
/// - `paid_at` - Time of payment
pub async fn create_handled_payment(
    db: &DatabaseConnection,
    member_id: Option<&str>,
    name: &str,
    amount: i64,
    paid_at: DateTime<Utc>,
) -> Result<entity::handled_payment::Model, DbErr> {
    entity::handled_payment::ActiveModel {
        member_id: ActiveValue::Set(member_id.map(str::to_string)),
        name: ActiveValue::Set(name.to_string()),
        amount: ActiveValue::Set(amount),
        paid_at: ActiveValue::Set(paid_at),
        payment_type: ActiveValue::Set("tip".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
