use serenity::all::User;

use crate::{bot::Context, error::AppError, service::member::MemberService};

/// Show how many members joined through someone's invites
#[poise::command(slash_command, guild_only)]
pub async fn invites(
    ctx: Context<'_>,
    #[description = "Member to check, yourself by default"] member: Option<User>,
) -> Result<(), AppError> {
    let user = member.as_ref().unwrap_or_else(|| ctx.author());
    let count = MemberService::new(&ctx.data().db)
        .invite_count(user.id.get())
        .await?;

    ctx.say(format!("{} has invited {} members", user.name, count))
        .await?;

    Ok(())
}
