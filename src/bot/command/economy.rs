use serenity::all::User;

use crate::{bot::Context, error::AppError, service::economy::EconomyService};

/// Show a wallet balance
#[poise::command(slash_command, guild_only)]
pub async fn balance(
    ctx: Context<'_>,
    #[description = "Member to check, yourself by default"] member: Option<User>,
) -> Result<(), AppError> {
    let user = member.as_ref().unwrap_or_else(|| ctx.author());
    let balance = EconomyService::new(&ctx.data().db)
        .balance(user.id.get())
        .await?;

    ctx.say(format!("{} has {} G", user.name, balance)).await?;

    Ok(())
}

/// Add to or take from a member's wallet
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "ADMINISTRATOR",
    required_permissions = "ADMINISTRATOR"
)]
pub async fn add_balance(
    ctx: Context<'_>,
    #[description = "Member whose wallet changes"] member: User,
    #[description = "Amount to add, negative to take"] amount: i64,
) -> Result<(), AppError> {
    let updated = EconomyService::new(&ctx.data().db)
        .add_balance(member.id.get(), amount)
        .await?;

    tracing::info!(
        admin_id = ctx.author().id.get(),
        member_id = updated.id,
        amount,
        "Balance adjusted"
    );

    ctx.say(format!(
        "{} now has {} G",
        member.name, updated.wallet_balance
    ))
    .await?;

    Ok(())
}

/// Send money to another member
#[poise::command(slash_command, guild_only)]
pub async fn transfer(
    ctx: Context<'_>,
    #[description = "Recipient"] member: User,
    #[description = "Amount to send"] amount: i64,
) -> Result<(), AppError> {
    if member.bot {
        return Err(AppError::BadRequest("Bots do not have wallets".to_string()));
    }

    let outcome = EconomyService::new(&ctx.data().db)
        .transfer(ctx.author().id.get(), member.id.get(), amount)
        .await?;

    ctx.say(format!(
        "Sent {} G to {}. Your balance: {} G",
        amount, member.name, outcome.from_balance
    ))
    .await?;

    Ok(())
}
