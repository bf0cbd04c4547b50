use crate::{
    error::{moderation::ModerationError, AppError},
    model::gender::Gender,
    service::gender::GenderService,
};
use test_utils::{builder::TestBuilder, factory};
