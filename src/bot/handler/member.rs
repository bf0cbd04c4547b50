use chrono::Utc;
use serenity::all::{Context, Member, RoleId, User};

use crate::{
    bot::{handler::guild::fetch_invites, state::BotState},
    model::member::{JoinKind, RecordJoinParam},
    service::member::MemberService,
};

/// Handles the guild_member_addition event when a member joins the guild.
///
/// Attributes the join to an inviter and, for returning members, gives back
/// the stored roles that have not expired.
pub async fn handle_guild_member_addition(state: &BotState, ctx: Context, new_member: Member) {
    if new_member.user.bot {
        return;
    }

    let member_id = new_member.user.id.get();

    let inviter_id = match fetch_invites(&ctx, new_member.guild_id).await {
        Ok(invites) => state.invites.detect_used(invites),
        Err(e) => {
            tracing::error!("Failed to fetch invites for join of {}: {:?}", member_id, e);
            None
        }
    };

    let member_service = MemberService::new(&state.db);
    let kind = match member_service
        .record_join(RecordJoinParam {
            member_id,
            inviter_id,
            joined_at: Utc::now(),
        })
        .await
    {
        Ok((_, kind)) => kind,
        Err(e) => {
            tracing::error!("Failed to record join of {}: {:?}", member_id, e);
            return;
        }
    };

    tracing::info!(
        member_id,
        inviter_id = ?inviter_id,
        rejoin = kind == JoinKind::Rejoin,
        "Member joined"
    );

    if kind != JoinKind::Rejoin {
        return;
    }

    let role_ids = match member_service.roles_to_restore(member_id, Utc::now()).await {
        Ok(role_ids) => role_ids,
        Err(e) => {
            tracing::error!("Failed to load roles to restore for {}: {:?}", member_id, e);
            return;
        }
    };

    for role_id in role_ids {
        if let Err(e) = ctx
            .http
            .add_member_role(
                new_member.guild_id,
                new_member.user.id,
                RoleId::new(role_id),
                Some("Restoring roles after rejoin"),
            )
            .await
        {
            tracing::error!("Failed to restore role {} to {}: {:?}", role_id, member_id, e);
        }
    }
}

/// Handles the guild_member_removal event when a member leaves the guild.
///
/// Member rows are kept so wallet, inviter and roles survive a rejoin.
pub async fn handle_guild_member_removal(user: User) {
    tracing::info!(member_id = user.id.get(), "Member left");
}
