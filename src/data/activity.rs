//! Activity point repository.
//!
//! Points are kept per member, day and activity type; adding points to an
//! existing row accumulates.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::activity::{Activity, ActivityType},
};

pub struct ActivityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds points to a member's row for `date` and `activity_type`.
    ///
    /// Creates the row when it does not exist yet. The member must exist.
    ///
    /// # Returns
    /// - `Ok(Activity)` - Row with the accumulated points
    /// - `Err(AppError)` - Database error
    pub async fn add_points(
        &self,
        member_id: u64,
        date: NaiveDate,
        activity_type: ActivityType,
        points: i64,
    ) -> Result<Activity, AppError> {
        let key = (
            member_id.to_string(),
            date,
            activity_type.as_str().to_string(),
        );
        let existing = entity::prelude::Activity::find_by_id(key.clone())
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(model) => {
                let total = model.points + points;
                let mut active: entity::activity::ActiveModel = model.into();
                active.points = ActiveValue::Set(total);
                active.update(self.db).await?
            }
            None => {
                entity::activity::ActiveModel {
                    member_id: ActiveValue::Set(key.0),
                    date: ActiveValue::Set(key.1),
                    activity_type: ActiveValue::Set(key.2),
                    points: ActiveValue::Set(points),
                }
                .insert(self.db)
                .await?
            }
        };

        Activity::from_entity(entity)
    }

    /// Gets a member's rows from `since` (inclusive), oldest first.
    pub async fn get_by_member_since(
        &self,
        member_id: u64,
        since: NaiveDate,
    ) -> Result<Vec<Activity>, AppError> {
        entity::prelude::Activity::find()
            .filter(entity::activity::Column::MemberId.eq(member_id.to_string()))
            .filter(entity::activity::Column::Date.gte(since))
            .order_by_asc(entity::activity::Column::Date)
            .order_by_asc(entity::activity::Column::ActivityType)
            .all(self.db)
            .await?
            .into_iter()
            .map(Activity::from_entity)
            .collect()
    }

    /// Gets all members' rows from `since` (inclusive).
    pub async fn get_since(&self, since: NaiveDate) -> Result<Vec<Activity>, AppError> {
        entity::prelude::Activity::find()
            .filter(entity::activity::Column::Date.gte(since))
            .order_by_asc(entity::activity::Column::MemberId)
            .order_by_asc(entity::activity::Column::Date)
            .all(self.db)
            .await?
            .into_iter()
            .map(Activity::from_entity)
            .collect()
    }
}
