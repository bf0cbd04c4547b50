use sea_orm::DatabaseConnection;

use crate::{
    data::unit_of_work::UnitOfWork,
    error::{moderation::ModerationError, AppError},
    model::{
        gender::{plan_gender_change, Gender},
        role::RoleType,
    },
};

/// Discord role changes for a gender switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenderRoleChange {
    pub add_role_id: Option<u64>,
    pub remove_role_id: Option<u64>,
}

pub struct GenderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GenderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gives a member one gender role and removes the other.
    ///
    /// # Arguments
    /// - `member_id` - Member to change
    /// - `target` - Gender role to assign
    /// - `held_role_ids` - Discord roles the member currently has
    ///
    /// # Returns
    /// - `Ok(GenderRoleChange)` - Roles for the bot to add and remove
    /// - `Err(AppError::ModerationErr(AlreadyAssigned))` - Member already has exactly that role
    /// - `Err(AppError::ModerationErr(RoleNotConfigured))` - Gender roles not synced
    pub async fn assign(
        &self,
        member_id: u64,
        target: Gender,
        held_role_ids: &[u64],
    ) -> Result<GenderRoleChange, AppError> {
        let uow = UnitOfWork::begin(self.db).await?;

        let mut role_ids = Vec::with_capacity(Gender::ALL.len());
        for gender in Gender::ALL {
            let role = uow
                .roles()
                .find_by_name(gender.role_name(), RoleType::Gender)
                .await?
                .ok_or_else(|| ModerationError::RoleNotConfigured(gender.role_name().to_string()))?;
            role_ids.push((gender, role.id));
        }

        let held: Vec<Gender> = role_ids
            .iter()
            .filter(|(_, role_id)| held_role_ids.contains(role_id))
            .map(|(gender, _)| *gender)
            .collect();
        let plan = plan_gender_change(target, &held);

        if plan.is_noop() {
            return Err(ModerationError::AlreadyAssigned(target.role_name().to_string()).into());
        }

        let role_id_of = |gender: Gender| {
            role_ids
                .iter()
                .find(|(candidate, _)| *candidate == gender)
                .map(|(_, role_id)| *role_id)
        };
        let change = GenderRoleChange {
            add_role_id: plan.add.and_then(role_id_of),
            remove_role_id: plan.remove.and_then(role_id_of),
        };

        uow.members().get_or_create(member_id).await?;
        if let Some(role_id) = change.add_role_id {
            uow.member_roles().assign(member_id, role_id, None).await?;
        }
        if let Some(role_id) = change.remove_role_id {
            uow.member_roles().remove(member_id, role_id).await?;
        }

        uow.commit().await?;

        Ok(change)
    }
}
