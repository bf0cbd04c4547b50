//! Activity points.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration as StdDuration, Instant};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{activity::ActivityRepository, unit_of_work::UnitOfWork},
    error::AppError,
    model::activity::{rank_totals, Activity, ActivityProfile, ActivityType, RankingEntry},
};

/// Period profiles and rankings cover when none is given.
pub const DEFAULT_PERIOD_DAYS: u32 = 30;
/// Longest period profiles and rankings look back over.
pub const MAX_PERIOD_DAYS: u32 = 3650;
pub const DEFAULT_RANKING_SIZE: usize = 10;
pub const MAX_RANKING_SIZE: usize = 25;

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds points to the member's row for the current UTC day.
    pub async fn add(
        &self,
        member_id: u64,
        activity_type: ActivityType,
        points: i64,
        now: DateTime<Utc>,
    ) -> Result<Activity, AppError> {
        let uow = UnitOfWork::begin(self.db).await?;

        uow.members().get_or_create(member_id).await?;
        let activity = uow
            .activities()
            .add_points(member_id, now.date_naive(), activity_type, points)
            .await?;

        uow.commit().await?;

        Ok(activity)
    }

    /// Adds the same points to several members in one transaction.
    ///
    /// Used by the voice accrual job for every eligible member at once.
    pub async fn add_many(
        &self,
        member_ids: &[u64],
        activity_type: ActivityType,
        points: i64,
        now: DateTime<Utc>,
    ) -> Result<usize, AppError> {
        if member_ids.is_empty() {
            return Ok(0);
        }

        let uow = UnitOfWork::begin(self.db).await?;
        let today = now.date_naive();

        for member_id in member_ids {
            uow.members().get_or_create(*member_id).await?;
            uow.activities()
                .add_points(*member_id, today, activity_type, points)
                .await?;
        }

        uow.commit().await?;

        Ok(member_ids.len())
    }

    /// Points per type over the last `days` days including today, with rank.
    pub async fn profile(
        &self,
        member_id: u64,
        days: u32,
        now: DateTime<Utc>,
    ) -> Result<ActivityProfile, AppError> {
        let since = period_start(days, now);
        let repo = ActivityRepository::new(self.db);

        let mut profile = ActivityProfile {
            member_id,
            ..Default::default()
        };
        for row in repo.get_by_member_since(member_id, since).await? {
            match row.activity_type {
                ActivityType::Text => profile.text += row.points,
                ActivityType::Voice => profile.voice += row.points,
                ActivityType::Bonus => profile.bonus += row.points,
            }
        }
        profile.total = profile.text + profile.voice + profile.bonus;

        if profile.total > 0 {
            let ranking = rank_totals(&repo.get_since(since).await?);
            profile.rank = ranking
                .iter()
                .find(|entry| entry.member_id == member_id)
                .map(|entry| entry.position);
        }

        Ok(profile)
    }

    /// Top members by points over the last `days` days.
    pub async fn ranking(
        &self,
        days: u32,
        limit: usize,
        now: DateTime<Utc>,
    ) -> Result<Vec<RankingEntry>, AppError> {
        let rows = ActivityRepository::new(self.db)
            .get_since(period_start(days, now))
            .await?;

        let mut ranking = rank_totals(&rows);
        ranking.truncate(limit);

        Ok(ranking)
    }
}

/// First day of a period of `days` days ending today.
///
/// Zero is treated as one and periods are capped at [`MAX_PERIOD_DAYS`].
fn period_start(days: u32, now: DateTime<Utc>) -> NaiveDate {
    let days = i64::from(days.clamp(1, MAX_PERIOD_DAYS));
    now.date_naive()
        .checked_sub_signed(Duration::days(days - 1))
        .unwrap_or(NaiveDate::MIN)
}

/// Per-member cooldown for message points.
pub struct MessageCooldown {
    cooldown: StdDuration,
    last_award: Mutex<HashMap<u64, Instant>>,
}

impl MessageCooldown {
    pub fn new(cooldown: StdDuration) -> Self {
        Self {
            cooldown,
            last_award: Mutex::new(HashMap::new()),
        }
    }

    /// Returns true and starts a new cooldown when the member may earn points.
    ///
    /// Expired cooldowns are dropped whenever a new one starts.
    pub fn try_acquire(&self, member_id: u64, now: Instant) -> bool {
        let Ok(mut last_award) = self.last_award.lock() else {
            return false;
        };

        match last_award.get(&member_id) {
            Some(last) if now.saturating_duration_since(*last) < self.cooldown => false,
            _ => {
                last_award.retain(|_, last| now.saturating_duration_since(*last) < self.cooldown);
                last_award.insert(member_id, now);
                true
            }
        }
    }
}
