//! Role event handlers.
//!
//! Keeps the `role` table in step with the guild. Only roles whose names mark
//! them as premium, mute or gender roles are stored; renaming a role away from
//! such a name forgets it.

use sea_orm::DatabaseConnection;
use serenity::all::{Role, RoleId};

use crate::service::role::RoleService;

/// Handles the guild_role_create and guild_role_update events.
pub async fn handle_guild_role_upsert(db: &DatabaseConnection, role: Role) {
    if let Err(e) = RoleService::new(db)
        .upsert_role(role.id.get(), &role.name)
        .await
    {
        tracing::error!("Failed to store role {} ({}): {:?}", role.name, role.id, e);
    } else {
        tracing::debug!("Processed role {} ({})", role.name, role.id);
    }
}

/// Handles the guild_role_delete event.
pub async fn handle_guild_role_delete(db: &DatabaseConnection, role_id: RoleId) {
    match RoleService::new(db).delete_role(role_id.get()).await {
        Ok(true) => tracing::info!("Deleted managed role {}", role_id),
        Ok(false) => {}
        Err(e) => tracing::error!("Failed to delete role {}: {:?}", role_id, e),
    }
}
