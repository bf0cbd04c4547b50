use crate::{
    data::activity::ActivityRepository,
    error::AppError,
    model::activity::ActivityType,
};
use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

mod add_points;
mod get_since;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}
