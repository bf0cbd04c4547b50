//! Mute roles and moderation checks.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{member_role::MemberRoleRepository, unit_of_work::UnitOfWork},
    error::{moderation::ModerationError, AppError},
    model::{
        moderation::{MuteKind, MuteOutcome},
        role::RoleType,
    },
    util::duration::format_duration,
};

/// Most messages `/clear` deletes at once.
pub const MAX_CLEAR_AMOUNT: u32 = 100;

/// Longest timeout Discord accepts.
pub fn max_timeout() -> Duration {
    Duration::days(28)
}

pub struct ModerationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModerationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gives a member a mute role until `duration` passes, or permanently.
    ///
    /// Muting an already muted member replaces the expiration.
    ///
    /// # Returns
    /// - `Ok(MuteOutcome)` - Role for the bot to add
    /// - `Err(AppError::ModerationErr(RoleNotConfigured))` - Mute role not synced
    /// - `Err(AppError::ModerationErr(InvalidDuration))` - Expiration out of range
    pub async fn mute(
        &self,
        member_id: u64,
        kind: MuteKind,
        duration: Option<Duration>,
        now: DateTime<Utc>,
    ) -> Result<MuteOutcome, AppError> {
        let uow = UnitOfWork::begin(self.db).await?;

        let role = uow
            .roles()
            .find_by_name(kind.role_name(), RoleType::Mute)
            .await?
            .ok_or_else(|| ModerationError::RoleNotConfigured(kind.role_name().to_string()))?;

        let expiration_date = duration
            .map(|duration| {
                now.checked_add_signed(duration)
                    .ok_or_else(|| ModerationError::InvalidDuration(format_duration(duration)))
            })
            .transpose()?;

        uow.members().get_or_create(member_id).await?;
        let replaced = uow.member_roles().find(member_id, role.id).await?;
        uow.member_roles()
            .assign(member_id, role.id, expiration_date)
            .await?;

        uow.commit().await?;

        tracing::info!(member_id, kind = kind.role_name(), "Member muted");

        Ok(MuteOutcome {
            kind,
            role_id: role.id,
            expiration_date,
            replaced,
        })
    }

    /// Restores the stored state from before `outcome`'s mute.
    ///
    /// Used when Discord refused the role, so the database does not list a mute
    /// the member never received.
    pub async fn revert_mute(&self, member_id: u64, outcome: &MuteOutcome) -> Result<(), AppError> {
        let repo = MemberRoleRepository::new(self.db);

        match &outcome.replaced {
            Some(previous) => {
                repo.assign(member_id, outcome.role_id, previous.expiration_date)
                    .await?;
            }
            None => {
                repo.remove(member_id, outcome.role_id).await?;
            }
        }

        Ok(())
    }

    /// Removes a mute role.
    ///
    /// # Returns
    /// - `Ok(u64)` - Discord role for the bot to remove
    /// - `Err(AppError::ModerationErr(NotAssigned))` - Member was not muted this way
    pub async fn unmute(&self, member_id: u64, kind: MuteKind) -> Result<u64, AppError> {
        let uow = UnitOfWork::begin(self.db).await?;

        let role = uow
            .roles()
            .find_by_name(kind.role_name(), RoleType::Mute)
            .await?
            .ok_or_else(|| ModerationError::RoleNotConfigured(kind.role_name().to_string()))?;

        if !uow.member_roles().remove(member_id, role.id).await? {
            return Err(ModerationError::NotAssigned(kind.role_name().to_string()).into());
        }

        uow.commit().await?;

        Ok(role.id)
    }

    /// Active mutes of a member with their expiration dates.
    pub async fn mutes(
        &self,
        member_id: u64,
        now: DateTime<Utc>,
    ) -> Result<Vec<(MuteKind, Option<DateTime<Utc>>)>, AppError> {
        let roles = MemberRoleRepository::new(self.db)
            .get_by_member_and_type(member_id, RoleType::Mute)
            .await?;

        Ok(roles
            .into_iter()
            .filter(|assigned| assigned.expiration_date.is_none_or(|expires| expires > now))
            .filter_map(|assigned| {
                MuteKind::from_role_name(&assigned.role.name)
                    .map(|kind| (kind, assigned.expiration_date))
            })
            .collect())
    }
}

/// Validates how many messages `/clear` should delete.
pub fn validate_clear_amount(amount: u32) -> Result<u8, ModerationError> {
    match amount {
        1..=MAX_CLEAR_AMOUNT => Ok(amount as u8),
        _ => Err(ModerationError::ClearAmountOutOfRange(amount)),
    }
}

/// Computes when a Discord timeout of `duration` ends.
pub fn timeout_until(
    duration: Option<Duration>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, ModerationError> {
    match duration {
        Some(duration) if duration > Duration::zero() && duration <= max_timeout() => now
            .checked_add_signed(duration)
            .ok_or(ModerationError::TimeoutOutOfRange),
        _ => Err(ModerationError::TimeoutOutOfRange),
    }
}
