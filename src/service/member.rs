use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{member::MemberRepository, member_role::MemberRoleRepository, unit_of_work::UnitOfWork},
    error::AppError,
    model::member::{JoinKind, Member, RecordJoinParam},
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a guild join, creating the inviter's record when needed.
    pub async fn record_join(&self, param: RecordJoinParam) -> Result<(Member, JoinKind), AppError> {
        let uow = UnitOfWork::begin(self.db).await?;

        if let Some(inviter_id) = param.inviter_id.filter(|id| *id != param.member_id) {
            uow.members().get_or_create(inviter_id).await?;
        }

        let param = RecordJoinParam {
            inviter_id: param.inviter_id.filter(|id| *id != param.member_id),
            ..param
        };
        let result = uow.members().record_join(param).await?;

        uow.commit().await?;

        Ok(result)
    }

    /// Number of members whose latest join used the member's invites.
    pub async fn invite_count(&self, member_id: u64) -> Result<u64, AppError> {
        MemberRepository::new(self.db)
            .count_invited_by(member_id)
            .await
    }

    /// Discord roles to give back to a returning member.
    ///
    /// Premium, mute and gender roles survive leaving the guild until they
    /// expire, so leaving cannot be used to shake off a mute.
    pub async fn roles_to_restore(
        &self,
        member_id: u64,
        now: DateTime<Utc>,
    ) -> Result<Vec<u64>, AppError> {
        let roles = MemberRoleRepository::new(self.db)
            .get_by_member(member_id)
            .await?;

        Ok(roles
            .into_iter()
            .filter(|assigned| assigned.expiration_date.is_none_or(|expires| expires > now))
            .map(|assigned| assigned.role.id)
            .collect())
    }
}
