//! Premium role shop.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{member_role::MemberRoleRepository, unit_of_work::UnitOfWork},
    error::{economy::EconomyError, AppError},
    model::{
        premium::{
            held_tiers, ActiveTier, PremiumTier, PurchaseKind, PurchaseOutcome, PREMIUM_TIERS,
        },
        role::RoleType,
    },
};

pub struct PremiumService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PremiumService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn catalog(&self) -> &'static [PremiumTier] {
        &PREMIUM_TIERS
    }

    /// Highest unexpired premium tier the member holds.
    pub async fn active_tier(
        &self,
        member_id: u64,
        now: DateTime<Utc>,
    ) -> Result<Option<ActiveTier>, AppError> {
        let roles = MemberRoleRepository::new(self.db)
            .get_by_member_and_type(member_id, RoleType::Premium)
            .await?;

        Ok(held_tiers(&roles, now).into_iter().next())
    }

    /// Buys a premium tier for 30 days.
    ///
    /// Buying the held tier extends it from its current expiration at full price.
    /// Buying a higher tier replaces the lower one, refunding its unused whole
    /// days against the new price. Buying below the held tier is rejected.
    ///
    /// # Arguments
    /// - `member_id` - Buyer
    /// - `tier_name` - Tier name, case-insensitive
    /// - `now` - Purchase time
    ///
    /// # Returns
    /// - `Ok(PurchaseOutcome)` - Roles for the bot to add and remove in Discord
    /// - `Err(AppError::EconomyErr(UnknownTier))` - Name not in the catalog
    /// - `Err(AppError::EconomyErr(RoleNotConfigured))` - Discord role not synced
    /// - `Err(AppError::EconomyErr(CannotDowngrade))` - A higher tier is active
    /// - `Err(AppError::EconomyErr(InsufficientFunds))` - Balance below the charge
    pub async fn buy(
        &self,
        member_id: u64,
        tier_name: &str,
        now: DateTime<Utc>,
    ) -> Result<PurchaseOutcome, AppError> {
        let tier = PremiumTier::find(tier_name)
            .ok_or_else(|| EconomyError::UnknownTier(tier_name.to_string()))?;

        let uow = UnitOfWork::begin(self.db).await?;

        let role = uow
            .roles()
            .find_by_name(tier.name, RoleType::Premium)
            .await?
            .ok_or_else(|| EconomyError::RoleNotConfigured(tier.name.to_string()))?;

        let member = uow.members().get_or_create(member_id).await?;
        let held = held_tiers(
            &uow.member_roles()
                .get_by_member_and_type(member_id, RoleType::Premium)
                .await?,
            now,
        );

        if let Some(highest) = held.first() {
            if highest.tier.rank() > tier.rank() {
                return Err(EconomyError::CannotDowngrade {
                    current: highest.tier.name.to_string(),
                    requested: tier.name.to_string(),
                }
                .into());
            }
        }

        let same = held.iter().find(|active| active.tier.name == tier.name);
        let lower: Vec<&ActiveTier> = held
            .iter()
            .filter(|active| active.tier.rank() < tier.rank())
            .collect();

        let (kind, expiration_date, refunded) = match (same, lower.first()) {
            (Some(current), _) => {
                let base = current
                    .expiration_date
                    .filter(|expires| *expires > now)
                    .unwrap_or(now);
                (PurchaseKind::Extension, base + PremiumTier::duration(), 0)
            }
            (None, Some(replaced)) => {
                let refund: i64 = lower
                    .iter()
                    .map(|active| {
                        let remaining = active
                            .expiration_date
                            .map(|expires| expires - now)
                            .unwrap_or_else(PremiumTier::duration);
                        active.tier.prorated_refund(remaining)
                    })
                    .sum();
                (
                    PurchaseKind::Upgrade { from: replaced.tier },
                    now + PremiumTier::duration(),
                    refund.min(tier.price),
                )
            }
            (None, None) => (PurchaseKind::New, now + PremiumTier::duration(), 0),
        };

        let charged = tier.price - refunded;
        if member.wallet_balance < charged {
            return Err(EconomyError::InsufficientFunds {
                balance: member.wallet_balance,
                required: charged,
            }
            .into());
        }

        let member = uow.members().add_balance(member_id, -charged).await?;
        uow.member_roles()
            .assign(member_id, role.id, Some(expiration_date))
            .await?;

        let mut removed_role_ids = Vec::new();
        if matches!(kind, PurchaseKind::Upgrade { .. }) {
            for active in &lower {
                uow.member_roles().remove(member_id, active.role_id).await?;
                removed_role_ids.push(active.role_id);
            }
        }

        uow.commit().await?;

        tracing::info!(
            member_id,
            tier = tier.name,
            charged,
            refunded,
            "Premium role purchased"
        );

        Ok(PurchaseOutcome {
            tier,
            kind,
            role_id: role.id,
            removed_role_ids,
            expiration_date,
            charged,
            refunded,
            balance_after: member.wallet_balance,
        })
    }
}
