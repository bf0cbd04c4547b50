use crate::{
    data::role::RoleRepository,
    error::AppError,
    model::role::RoleType,
    service::role::RoleService,
};
use test_utils::builder::TestBuilder;

mod sync_roles;
