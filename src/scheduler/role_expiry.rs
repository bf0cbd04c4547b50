use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{GuildId, Http, RoleId, UserId};

use crate::{data::member_role::MemberRoleRepository, error::AppError};

/// Result of removing a role from a member in Discord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleRemoval {
    Removed,
    /// Member or role no longer exists in Discord.
    Gone,
    Failed(String),
}

impl RoleRemoval {
    /// Whether the stored assignment can be deleted.
    pub fn deletes_row(&self) -> bool {
        matches!(self, Self::Removed | Self::Gone)
    }
}

/// Discord side of expiring a role.
#[async_trait]
pub trait RoleRemover: Send + Sync {
    async fn remove_role(&self, member_id: u64, role_id: u64) -> RoleRemoval;
}

/// Removes roles through the Discord HTTP API.
pub struct HttpRoleRemover<'a> {
    discord_http: &'a Http,
    guild_id: GuildId,
}

impl<'a> HttpRoleRemover<'a> {
    pub fn new(discord_http: &'a Http, guild_id: GuildId) -> Self {
        Self {
            discord_http,
            guild_id,
        }
    }
}

#[async_trait]
impl RoleRemover for HttpRoleRemover<'_> {
    async fn remove_role(&self, member_id: u64, role_id: u64) -> RoleRemoval {
        let result = self
            .discord_http
            .remove_member_role(
                self.guild_id,
                UserId::new(member_id),
                RoleId::new(role_id),
                Some("Role expired"),
            )
            .await;

        classify_removal(result)
    }
}

/// Removes expired premium and mute roles.
///
/// Each expired row is removed from the member in Discord first and deleted
/// afterwards, so a failed Discord call is retried on the next run. A member or
/// role that no longer exists in Discord only needs the row deleted.
///
/// # Returns
/// - `Ok(usize)` - Number of expired roles removed
/// - `Err(AppError)` - Database error
pub async fn process_expired_roles(
    db: &DatabaseConnection,
    remover: &dyn RoleRemover,
) -> Result<usize, AppError> {
    let repo = MemberRoleRepository::new(db);
    let expired = repo.get_expired(Utc::now()).await?;
    let mut removed = 0;

    for member_role in expired {
        let removal = remover
            .remove_role(member_role.member_id, member_role.role_id)
            .await;

        match &removal {
            RoleRemoval::Removed => {}
            RoleRemoval::Gone => tracing::debug!(
                "Member {} or role {} no longer exists in Discord",
                member_role.member_id,
                member_role.role_id
            ),
            RoleRemoval::Failed(reason) => tracing::error!(
                "Failed to remove expired role {} from {}: {}",
                member_role.role_id,
                member_role.member_id,
                reason
            ),
        }

        if !removal.deletes_row() {
            continue;
        }

        repo.remove(member_role.member_id, member_role.role_id)
            .await?;
        removed += 1;

        tracing::info!(
            member_id = member_role.member_id,
            role_id = member_role.role_id,
            "Removed expired role"
        );
    }

    Ok(removed)
}

fn classify_removal(result: Result<(), serenity::Error>) -> RoleRemoval {
    match result {
        Ok(()) => RoleRemoval::Removed,
        Err(e) if is_not_found_status(status_code(&e)) => RoleRemoval::Gone,
        Err(e) => RoleRemoval::Failed(format!("{:?}", e)),
    }
}

fn status_code(error: &serenity::Error) -> Option<u16> {
    match error {
        serenity::Error::Http(http_error) => {
            http_error.status_code().map(|status| status.as_u16())
        }
        _ => None,
    }
}

fn is_not_found_status(status: Option<u16>) -> bool {
    status == Some(404)
}
