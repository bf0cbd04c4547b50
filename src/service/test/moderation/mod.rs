use crate::{
    error::{moderation::ModerationError, AppError},
    model::moderation::MuteKind,
    service::moderation::ModerationService,
};
use chrono::{DateTime, Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod mute;
