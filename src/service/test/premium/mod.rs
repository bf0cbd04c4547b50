use crate::{
    error::{economy::EconomyError, AppError},
    model::premium::PurchaseKind,
    service::premium::PremiumService,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod active_tier;
