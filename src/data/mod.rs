//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one table each and return domain models,
//! converting entity models at the boundary. Every repository is generic over
//! `ConnectionTrait` so the same code runs on the connection pool or inside a
//! [`unit_of_work::UnitOfWork`] transaction.

pub mod activity;
pub mod channel_permission;
pub mod handled_payment;
pub mod member;
pub mod member_role;
pub mod role;
pub mod unit_of_work;

#[cfg(test)]
mod test;
