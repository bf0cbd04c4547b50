//! Payment models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, util::parse::parse_optional_u64};

/// A payment reported by the payment feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingPayment {
    /// Free text the payer entered, expected to contain their Discord ID.
    pub name: String,
    pub amount: i64,
    pub paid_at: DateTime<Utc>,
    #[serde(default = "default_payment_type")]
    pub payment_type: String,
}

fn default_payment_type() -> String {
    "tip".to_string()
}

/// A payment already recorded in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandledPayment {
    pub id: i32,
    /// Member credited, `None` until an admin assigns it.
    pub member_id: Option<u64>,
    pub name: String,
    pub amount: i64,
    pub paid_at: DateTime<Utc>,
    pub payment_type: String,
}

impl HandledPayment {
    pub fn from_entity(entity: entity::handled_payment::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            member_id: parse_optional_u64(entity.member_id)?,
            name: entity.name,
            amount: entity.amount,
            paid_at: entity.paid_at,
            payment_type: entity.payment_type,
        })
    }
}

/// What processing an incoming payment did.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    /// Already in the ledger, nothing changed.
    Duplicate,
    /// Recorded and credited to the member.
    Credited {
        payment: HandledPayment,
        member_id: u64,
        balance_after: i64,
    },
    /// Recorded without a member; needs manual assignment.
    Unassigned { payment: HandledPayment },
}
