use crate::{
    error::{economy::EconomyError, AppError},
    service::economy::EconomyService,
};
use test_utils::{builder::TestBuilder, factory};

mod balance;
