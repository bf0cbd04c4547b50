use serenity::all::User;

use crate::{bot::Context, error::AppError, service::payment::PaymentService};

const DEFAULT_UNASSIGNED_LIMIT: u64 = 10;

/// Manage payments that could not be matched to a member
#[poise::command(
    slash_command,
    guild_only,
    subcommands("assign", "unassigned"),
    subcommand_required,
    default_member_permissions = "ADMINISTRATOR",
    required_permissions = "ADMINISTRATOR"
)]
pub async fn payments(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Credit an unassigned payment to a member
#[poise::command(slash_command, guild_only, required_permissions = "ADMINISTRATOR")]
pub async fn assign(
    ctx: Context<'_>,
    #[description = "Payment number from /payments unassigned"] payment_id: i32,
    #[description = "Member who paid"] member: User,
) -> Result<(), AppError> {
    let (payment, balance) = PaymentService::new(&ctx.data().db)
        .assign(payment_id, member.id.get())
        .await?;

    tracing::info!(
        admin_id = ctx.author().id.get(),
        payment_id,
        member_id = member.id.get(),
        "Payment assigned manually"
    );

    ctx.say(format!(
        "Credited payment #{} ({} G) to {}. Balance: {} G",
        payment.id, payment.amount, member.name, balance
    ))
    .await?;

    Ok(())
}

/// List recent payments without a member
#[poise::command(slash_command, guild_only, required_permissions = "ADMINISTRATOR")]
pub async fn unassigned(
    ctx: Context<'_>,
    #[description = "Payments to show, 10 by default"] limit: Option<u64>,
) -> Result<(), AppError> {
    let payments = PaymentService::new(&ctx.data().db)
        .unassigned(limit.unwrap_or(DEFAULT_UNASSIGNED_LIMIT))
        .await?;

    let content = if payments.is_empty() {
        "No unassigned payments".to_string()
    } else {
        payments
            .iter()
            .map(|payment| {
                format!(
                    "#{} {} G from \"{}\" at {}",
                    payment.id,
                    payment.amount,
                    payment.name,
                    payment.paid_at.format("%Y-%m-%d %H:%M UTC")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    ctx.say(content).await?;

    Ok(())
}
