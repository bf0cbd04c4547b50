use crate::{
    data::member::MemberRepository,
    error::{economy::EconomyError, AppError},
};
use test_utils::{builder::TestBuilder, factory};

mod add_balance;
mod record_join;
