use crate::{
    data::handled_payment::HandledPaymentRepository,
    error::{economy::EconomyError, AppError},
    model::payment::IncomingPayment,
};
use chrono::{TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

mod assign_member;
mod create;
mod exists;

fn incoming(name: &str, amount: i64) -> IncomingPayment {
    IncomingPayment {
        name: name.to_string(),
        amount,
        paid_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        payment_type: "tip".to_string(),
    }
}
