use serenity::all::{RoleId, User};

use crate::{
    bot::{command::guild_id, Context},
    error::AppError,
    model::gender::Gender,
    service::gender::GenderService,
};

/// Give a member a gender role
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "MANAGE_ROLES",
    required_permissions = "MANAGE_ROLES",
    required_bot_permissions = "MANAGE_ROLES"
)]
pub async fn gender(
    ctx: Context<'_>,
    #[description = "Member to change"] member: User,
    #[description = "Role to give"] gender: Gender,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;
    let guild_member = guild_id.member(ctx.serenity_context(), member.id).await?;
    let held_role_ids: Vec<u64> = guild_member.roles.iter().map(|role| role.get()).collect();

    let change = GenderService::new(&ctx.data().db)
        .assign(member.id.get(), gender, &held_role_ids)
        .await?;

    let reason = format!("Gender role set by {}", ctx.author().name);
    if let Some(role_id) = change.remove_role_id {
        ctx.http()
            .remove_member_role(guild_id, member.id, RoleId::new(role_id), Some(&reason))
            .await?;
    }
    if let Some(role_id) = change.add_role_id {
        ctx.http()
            .add_member_role(guild_id, member.id, RoleId::new(role_id), Some(&reason))
            .await?;
    }

    ctx.say(format!("Gave {} the {} role", member.name, gender.role_name()))
        .await?;

    Ok(())
}
