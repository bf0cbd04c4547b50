//! Activity point models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::{
    error::{internal::InternalError, AppError},
    util::parse::parse_u64_from_string,
};

/// Points for one message outside the cooldown.
pub const TEXT_POINTS: i64 = 1;
/// Seconds between messages that earn points.
pub const TEXT_COOLDOWN_SECONDS: u64 = 60;
/// Points per minute spent in an active voice channel.
pub const VOICE_POINTS_PER_MINUTE: i64 = 1;
/// Non-bot members a voice channel needs for its members to earn points.
pub const VOICE_MIN_MEMBERS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActivityType {
    Text,
    Voice,
    Bonus,
}

impl ActivityType {
    pub const ALL: [ActivityType; 3] = [Self::Text, Self::Voice, Self::Bonus];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Voice => "voice",
            Self::Bonus => "bonus",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "voice" => Ok(Self::Voice),
            "bonus" => Ok(Self::Bonus),
            other => Err(InternalError::UnknownStoredValue {
                kind: "activity type",
                value: other.to_string(),
            }),
        }
    }
}

/// Points a member earned on one day for one activity type.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub member_id: u64,
    pub date: NaiveDate,
    pub activity_type: ActivityType,
    pub points: i64,
}

impl Activity {
    pub fn from_entity(entity: entity::activity::Model) -> Result<Self, AppError> {
        Ok(Self {
            member_id: parse_u64_from_string(entity.member_id)?,
            date: entity.date,
            activity_type: entity.activity_type.parse()?,
            points: entity.points,
        })
    }
}

/// A member's points over a period.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ActivityProfile {
    pub member_id: u64,
    pub text: i64,
    pub voice: i64,
    pub bonus: i64,
    pub total: i64,
    /// 1-based position in the ranking, `None` without any points.
    pub rank: Option<usize>,
}

/// One row of the activity ranking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RankingEntry {
    pub position: usize,
    pub member_id: u64,
    pub points: i64,
}

/// Sums points per member and orders by total descending, then member ID ascending.
pub fn rank_totals(rows: &[Activity]) -> Vec<RankingEntry> {
    let mut totals: std::collections::HashMap<u64, i64> = std::collections::HashMap::new();
    for row in rows {
        *totals.entry(row.member_id).or_default() += row.points;
    }

    let mut ordered: Vec<(u64, i64)> = totals.into_iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, (member_id, points))| RankingEntry {
            position: index + 1,
            member_id,
            points,
        })
        .collect()
}
