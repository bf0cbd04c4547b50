use crate::{
    error::AppError,
    model::activity::ActivityType,
    service::activity::ActivityService,
};
use chrono::{DateTime, Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod profile;
mod ranking;

fn noon() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-06-10T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}
