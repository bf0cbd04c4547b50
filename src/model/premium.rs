//! Premium role catalog and purchase results.

use chrono::{DateTime, Duration, Utc};

use crate::model::member_role::AssignedRole;

/// Days a premium purchase lasts.
pub const PREMIUM_DURATION_DAYS: i64 = 30;

/// A premium role sold in the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PremiumTier {
    /// Discord role name, also the name used with `/buy`.
    pub name: &'static str,
    /// Price in wallet currency for one period.
    pub price: i64,
    /// How many channel moderators the owner may appoint.
    pub max_mods: usize,
}

/// Premium tiers ordered from lowest to highest.
pub const PREMIUM_TIERS: [PremiumTier; 4] = [
    PremiumTier {
        name: "zG50",
        price: 49,
        max_mods: 1,
    },
    PremiumTier {
        name: "zG100",
        price: 99,
        max_mods: 2,
    },
    PremiumTier {
        name: "zG500",
        price: 499,
        max_mods: 3,
    },
    PremiumTier {
        name: "zG1000",
        price: 999,
        max_mods: 5,
    },
];

impl PremiumTier {
    /// Looks up a tier by name, ignoring case.
    pub fn find(name: &str) -> Option<&'static PremiumTier> {
        PREMIUM_TIERS
            .iter()
            .find(|tier| tier.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Position in the catalog; higher is better.
    pub fn rank(&self) -> usize {
        PREMIUM_TIERS
            .iter()
            .position(|tier| tier.name == self.name)
            .unwrap_or(0)
    }

    pub fn duration() -> Duration {
        Duration::days(PREMIUM_DURATION_DAYS)
    }

    /// Refund for the unused part of this tier when upgrading.
    ///
    /// Only whole remaining days count, so a partially used day is not refunded.
    pub fn prorated_refund(&self, remaining: Duration) -> i64 {
        let days = remaining.num_days().clamp(0, PREMIUM_DURATION_DAYS);
        self.price * days / PREMIUM_DURATION_DAYS
    }
}

/// What a purchase did to the buyer's premium roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseKind {
    /// No premium role was held.
    New,
    /// The same tier was extended.
    Extension,
    /// A lower tier was replaced.
    Upgrade { from: &'static PremiumTier },
}

/// Result of a premium purchase for the bot to apply in Discord.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseOutcome {
    pub tier: &'static PremiumTier,
    pub kind: PurchaseKind,
    /// Discord role to add to the buyer.
    pub role_id: u64,
    /// Discord roles to remove from the buyer.
    pub removed_role_ids: Vec<u64>,
    pub expiration_date: DateTime<Utc>,
    /// Amount taken from the wallet after the refund.
    pub charged: i64,
    pub refunded: i64,
    pub balance_after: i64,
}

/// The highest premium role a member currently holds.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTier {
    pub tier: &'static PremiumTier,
    pub role_id: u64,
    pub expiration_date: Option<DateTime<Utc>>,
}

/// Unexpired premium roles among `roles`, highest tier first.
///
/// Roles whose name is not in the catalog are ignored.
pub fn held_tiers(roles: &[AssignedRole], now: DateTime<Utc>) -> Vec<ActiveTier> {
    let mut held: Vec<ActiveTier> = roles
        .iter()
        .filter(|assigned| assigned.expiration_date.is_none_or(|expires| expires > now))
        .filter_map(|assigned| {
            PremiumTier::find(&assigned.role.name).map(|tier| ActiveTier {
                tier,
                role_id: assigned.role.id,
                expiration_date: assigned.expiration_date,
            })
        })
        .collect();

    held.sort_by_key(|active| std::cmp::Reverse(active.tier.rank()));
    held
}
