use chrono::Utc;
use poise::CreateReply;
use serenity::all::{CreateAllowedMentions, User};

use crate::{
    bot::Context,
    error::AppError,
    model::activity::ActivityType,
    service::activity::{
        ActivityService, DEFAULT_PERIOD_DAYS, DEFAULT_RANKING_SIZE, MAX_PERIOD_DAYS,
        MAX_RANKING_SIZE,
    },
};

/// Show activity points
#[poise::command(slash_command, guild_only)]
pub async fn profile(
    ctx: Context<'_>,
    #[description = "Member to check, yourself by default"] member: Option<User>,
    #[description = "Days to count, 30 by default"]
    #[min = 1]
    #[max = 3650]
    days: Option<u32>,
) -> Result<(), AppError> {
    let user = member.as_ref().unwrap_or_else(|| ctx.author());
    let days = days.unwrap_or(DEFAULT_PERIOD_DAYS).clamp(1, MAX_PERIOD_DAYS);

    let profile = ActivityService::new(&ctx.data().db)
        .profile(user.id.get(), days, Utc::now())
        .await?;

    let rank = profile
        .rank
        .map(|rank| format!("#{}", rank))
        .unwrap_or_else(|| "unranked".to_string());

    ctx.say(format!(
        "**{}** over {} days: {} points ({})\ntext: {}, voice: {}, bonus: {}",
        user.name, days, profile.total, rank, profile.text, profile.voice, profile.bonus
    ))
    .await?;

    Ok(())
}

/// Show the most active members
#[poise::command(slash_command, guild_only)]
pub async fn ranking(
    ctx: Context<'_>,
    #[description = "Days to count, 30 by default"]
    #[min = 1]
    #[max = 3650]
    days: Option<u32>,
    #[description = "Members to show, 10 by default"]
    #[max = 25]
    size: Option<u32>,
) -> Result<(), AppError> {
    let days = days.unwrap_or(DEFAULT_PERIOD_DAYS).clamp(1, MAX_PERIOD_DAYS);
    let size = size
        .map(|size| size as usize)
        .unwrap_or(DEFAULT_RANKING_SIZE)
        .clamp(1, MAX_RANKING_SIZE);

    let ranking = ActivityService::new(&ctx.data().db)
        .ranking(days, size, Utc::now())
        .await?;

    let content = if ranking.is_empty() {
        format!("No activity in the last {} days", days)
    } else {
        ranking
            .iter()
            .map(|entry| {
                format!(
                    "{}. <@{}>: {} points",
                    entry.position, entry.member_id, entry.points
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    ctx.send(
        CreateReply::default()
            .content(content)
            .allowed_mentions(CreateAllowedMentions::new()),
    )
    .await?;

    Ok(())
}

/// Grant bonus activity points
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "ADMINISTRATOR",
    required_permissions = "ADMINISTRATOR"
)]
pub async fn bonus(
    ctx: Context<'_>,
    #[description = "Member to reward"] member: User,
    #[description = "Points to grant"] points: i64,
) -> Result<(), AppError> {
    if points <= 0 {
        return Err(AppError::BadRequest(
            "Bonus points must be greater than zero".to_string(),
        ));
    }

    ActivityService::new(&ctx.data().db)
        .add(member.id.get(), ActivityType::Bonus, points, Utc::now())
        .await?;

    ctx.say(format!("Granted {} bonus points to {}", points, member.name))
        .await?;

    Ok(())
}
