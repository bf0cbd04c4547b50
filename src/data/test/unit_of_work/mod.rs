use crate::{
    data::{member::MemberRepository, unit_of_work::UnitOfWork},
    error::AppError,
};
use test_utils::{builder::TestBuilder, factory};

mod commit;
