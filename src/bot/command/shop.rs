use chrono::Utc;
use serenity::all::RoleId;

use crate::{
    bot::{command::guild_id, Context},
    error::AppError,
    model::premium::{PurchaseKind, PREMIUM_DURATION_DAYS},
    service::premium::PremiumService,
};

/// List premium roles for sale
#[poise::command(slash_command, guild_only)]
pub async fn shop(ctx: Context<'_>) -> Result<(), AppError> {
    let service = PremiumService::new(&ctx.data().db);
    let active = service
        .active_tier(ctx.author().id.get(), Utc::now())
        .await?;

    let mut lines: Vec<String> = service
        .catalog()
        .iter()
        .map(|tier| {
            format!(
                "**{}**: {} G for {} days, {} channel moderators",
                tier.name, tier.price, PREMIUM_DURATION_DAYS, tier.max_mods
            )
        })
        .collect();

    match active {
        Some(active) => lines.push(format!(
            "\nYou have **{}** {}",
            active.tier.name,
            super::format_expiration(active.expiration_date)
        )),
        None => lines.push("\nBuy a role with `/buy`".to_string()),
    }

    ctx.say(lines.join("\n")).await?;

    Ok(())
}

/// Buy or extend a premium role
#[poise::command(slash_command, guild_only)]
pub async fn buy(
    ctx: Context<'_>,
    #[description = "Premium role name, e.g. zG100"] role: String,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;
    let member_id = ctx.author().id;

    let outcome = PremiumService::new(&ctx.data().db)
        .buy(member_id.get(), &role, Utc::now())
        .await?;

    let http = ctx.http();
    http.add_member_role(
        guild_id,
        member_id,
        RoleId::new(outcome.role_id),
        Some("Premium purchase"),
    )
    .await?;
    for removed_role_id in &outcome.removed_role_ids {
        http.remove_member_role(
            guild_id,
            member_id,
            RoleId::new(*removed_role_id),
            Some("Premium upgrade"),
        )
        .await?;
    }

    let summary = match outcome.kind {
        PurchaseKind::New => format!("Bought **{}**", outcome.tier.name),
        PurchaseKind::Extension => format!("Extended **{}**", outcome.tier.name),
        PurchaseKind::Upgrade { from } => format!(
            "Upgraded **{}** to **{}** with a refund of {} G",
            from.name, outcome.tier.name, outcome.refunded
        ),
    };

    ctx.say(format!(
        "{} {}. Charged {} G, balance: {} G",
        summary,
        super::format_expiration(Some(outcome.expiration_date)),
        outcome.charged,
        outcome.balance_after
    ))
    .await?;

    Ok(())
}
