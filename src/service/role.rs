//! Keeps the `role` table in sync with the guild's managed roles.

use sea_orm::DatabaseConnection;

use crate::{
    data::{role::RoleRepository, unit_of_work::UnitOfWork},
    error::AppError,
    model::{gender::Gender, moderation::MuteKind, premium::PREMIUM_TIERS, role::RoleType},
};

/// Determines whether a guild role is managed by the bot, by its name.
pub fn classify_role_name(name: &str) -> Option<RoleType> {
    if PREMIUM_TIERS.iter().any(|tier| tier.name == name) {
        return Some(RoleType::Premium);
    }
    if MuteKind::from_role_name(name).is_some() {
        return Some(RoleType::Mute);
    }
    if Gender::ALL.iter().any(|gender| gender.role_name() == name) {
        return Some(RoleType::Gender);
    }

    None
}

pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores every managed role found among the guild's roles.
    ///
    /// # Arguments
    /// - `roles` - `(role_id, name)` of every guild role
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of managed roles stored
    pub async fn sync_roles(&self, roles: &[(u64, String)]) -> Result<usize, AppError> {
        let uow = UnitOfWork::begin(self.db).await?;
        let mut synced = 0;

        for (role_id, name) in roles {
            if let Some(role_type) = classify_role_name(name) {
                uow.roles().upsert(*role_id, name, role_type).await?;
                synced += 1;
            }
        }

        uow.commit().await?;

        Ok(synced)
    }

    /// Handles a role created or renamed in Discord.
    ///
    /// A role renamed away from a managed name is forgotten.
    pub async fn upsert_role(&self, role_id: u64, name: &str) -> Result<(), AppError> {
        let repo = RoleRepository::new(self.db);

        match classify_role_name(name) {
            Some(role_type) => {
                repo.upsert(role_id, name, role_type).await?;
            }
            None => {
                repo.delete(role_id).await?;
            }
        }

        Ok(())
    }

    pub async fn delete_role(&self, role_id: u64) -> Result<bool, AppError> {
        RoleRepository::new(self.db).delete(role_id).await
    }
}
