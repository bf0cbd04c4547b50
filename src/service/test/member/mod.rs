use crate::{
    error::AppError,
    model::member::{JoinKind, RecordJoinParam},
    service::member::MemberService,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod record_join;
