//! Factory for creating activity point rows.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an activity row for a member on a given day.
///
/// # Arguments
/// - `db` - Database connection
/// - `member_id` - Existing member ID
/// - `date` - Day the points were earned
/// - `activity_type` - `"text"`, `"voice"` or `"bonus"`
/// - `points` - Points for that day and type
pub async fn create_activity(
    db: &DatabaseConnection,
    member_id: &str,
    date: NaiveDate,
    activity_type: &str,
    points: i64,
) -> Result<entity::activity::Model, DbErr> {
    entity::activity::ActiveModel {
        member_id: ActiveValue::Set(member_id.to_string()),
        date: ActiveValue::Set(date),
        activity_type: ActiveValue::Set(activity_type.to_string()),
        points: ActiveValue::Set(points),
    }
    .insert(db)
    .await
}
