//! Voice channel self-management.
//!
//! Owners keep a set of permission overwrites per target. The bot applies them
//! to the owner's current channel and re-applies them whenever it creates a new
//! channel for the owner.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    data::{
        channel_permission::ChannelPermissionRepository, member::MemberRepository,
        member_role::MemberRoleRepository, unit_of_work::UnitOfWork,
    },
    error::{moderation::ModerationError, voice::VoiceError, AppError},
    model::{
        channel_permission::{ChannelPermission, Overwrite, PermissionChange, VoicePermission},
        member::Member,
        premium::{held_tiers, PremiumTier},
        role::RoleType,
    },
    util::duration::format_duration,
};

/// Highest user limit Discord accepts for voice channels.
pub const MAX_USER_LIMIT: u32 = 99;

/// Why a member may use voice commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceAccess {
    /// Active premium tier, `None` when access comes from a bypass.
    pub tier: Option<&'static PremiumTier>,
}

impl VoiceAccess {
    /// Channel moderators the owner may appoint.
    pub fn max_mods(&self) -> usize {
        self.tier.map(|tier| tier.max_mods).unwrap_or(0)
    }
}

/// Request to change one permission in an owner's channel.
#[derive(Debug, Clone, Copy)]
pub struct SetPermissionParam {
    /// Member running the command: the owner or one of their moderators.
    pub actor_id: u64,
    pub owner_id: u64,
    /// Member, or the guild ID for @everyone.
    pub target_id: u64,
    pub permission: VoicePermission,
    pub change: PermissionChange,
}

pub struct VoiceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoiceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks that a member may manage voice channels.
    ///
    /// # Returns
    /// - `Ok(VoiceAccess)` - Member has premium or an active bypass
    /// - `Err(AppError::VoiceErr(PremiumRequired))` - Neither
    pub async fn access(&self, member_id: u64, now: DateTime<Utc>) -> Result<VoiceAccess, AppError> {
        check_access(self.db, member_id, now).await
    }

    /// Changes one permission the owner keeps for a target.
    ///
    /// Moderators of the owner's channel may change anything except the
    /// moderator flag itself. Granting the moderator flag is limited by the
    /// owner's premium tier. An overwrite left with no flags is deleted.
    ///
    /// # Returns
    /// - `Ok(Overwrite)` - Resulting overwrite for the bot to apply
    /// - `Err(AppError::VoiceErr(_))` - Rule violation
    pub async fn set_permission(
        &self,
        param: SetPermissionParam,
        now: DateTime<Utc>,
    ) -> Result<Overwrite, AppError> {
        if param.target_id == param.owner_id || param.target_id == param.actor_id {
            return Err(VoiceError::SelfTarget.into());
        }

        let uow = UnitOfWork::begin(self.db).await?;
        let permissions = uow.channel_permissions();

        if param.actor_id != param.owner_id {
            if param.permission == VoicePermission::Mod {
                return Err(VoiceError::OwnerOnly.into());
            }

            let actor_is_mod = permissions
                .find(param.owner_id, param.actor_id)
                .await?
                .is_some_and(|stored| stored.overwrite.allow.contains(VoicePermission::Mod.flag()));
            if !actor_is_mod {
                return Err(VoiceError::NotChannelOwner.into());
            }
        }

        let access = check_access(uow.transaction(), param.owner_id, now).await?;
        uow.members().get_or_create(param.owner_id).await?;

        let current = permissions
            .find(param.owner_id, param.target_id)
            .await?
            .map(|stored| stored.overwrite)
            .unwrap_or_default();
        let flag = param.permission.flag();
        let updated = current.apply(flag, param.change);

        let grants_mod = updated.allow.contains(flag) && !current.allow.contains(flag);
        if param.permission == VoicePermission::Mod && grants_mod {
            let limit = access.max_mods();
            if permissions.count_with_flag(param.owner_id, flag).await? >= limit {
                return Err(VoiceError::ModLimitReached { limit }.into());
            }
        }

        if updated.is_empty() {
            permissions.delete(param.owner_id, param.target_id).await?;
        } else {
            permissions
                .upsert(param.owner_id, param.target_id, updated, now)
                .await?;
        }

        uow.commit().await?;

        Ok(updated)
    }

    /// Clears the owner's stored overwrite for one target, or all of them.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of overwrites removed
    pub async fn reset(&self, owner_id: u64, target_id: Option<u64>) -> Result<u64, AppError> {
        let repo = ChannelPermissionRepository::new(self.db);

        match target_id {
            Some(target_id) => Ok(repo.delete(owner_id, target_id).await? as u64),
            None => repo.delete_by_owner(owner_id).await,
        }
    }

    /// Overwrites to apply when creating a channel for the owner.
    pub async fn stored_overwrites(&self, owner_id: u64) -> Result<Vec<ChannelPermission>, AppError> {
        ChannelPermissionRepository::new(self.db)
            .get_by_owner(owner_id)
            .await
    }

    /// Members the owner appointed as channel moderators.
    pub async fn moderators(&self, owner_id: u64) -> Result<Vec<u64>, AppError> {
        let flag = VoicePermission::Mod.flag();

        Ok(self
            .stored_overwrites(owner_id)
            .await?
            .into_iter()
            .filter(|stored| stored.overwrite.allow.contains(flag))
            .map(|stored| stored.target_id)
            .collect())
    }

    /// Grants voice command access without premium for `duration`.
    ///
    /// Extends an active bypass instead of replacing it.
    pub async fn grant_bypass(
        &self,
        member_id: u64,
        duration: Duration,
        now: DateTime<Utc>,
    ) -> Result<Member, AppError> {
        let repo = MemberRepository::new(self.db);
        let member = repo.get_or_create(member_id).await?;

        let base = member
            .voice_bypass_until
            .filter(|until| *until > now)
            .unwrap_or(now);

        let until = base
            .checked_add_signed(duration)
            .ok_or_else(|| ModerationError::InvalidDuration(format_duration(duration)))?;

        repo.set_voice_bypass_until(member_id, Some(until)).await
    }
}

/// Validates a channel user limit.
pub fn validate_user_limit(limit: u32) -> Result<u32, VoiceError> {
    if limit > MAX_USER_LIMIT {
        return Err(VoiceError::InvalidUserLimit(limit));
    }

    Ok(limit)
}

async fn check_access<C: ConnectionTrait>(
    db: &C,
    member_id: u64,
    now: DateTime<Utc>,
) -> Result<VoiceAccess, AppError> {
    let roles = MemberRoleRepository::new(db)
        .get_by_member_and_type(member_id, RoleType::Premium)
        .await?;

    if let Some(active) = held_tiers(&roles, now).into_iter().next() {
        return Ok(VoiceAccess {
            tier: Some(active.tier),
        });
    }

    let has_bypass = MemberRepository::new(db)
        .find_by_id(member_id)
        .await?
        .is_some_and(|member| member.has_voice_bypass(now));

    if has_bypass {
        Ok(VoiceAccess { tier: None })
    } else {
        Err(VoiceError::PremiumRequired.into())
    }
}
