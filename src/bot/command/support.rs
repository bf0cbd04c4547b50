use crate::{bot::Context, error::AppError};

/// Ask the support assistant a question
#[poise::command(slash_command, guild_only)]
pub async fn ask(
    ctx: Context<'_>,
    #[description = "Your question"] question: String,
) -> Result<(), AppError> {
    // model answers can take longer than the interaction deadline
    ctx.defer().await?;

    let answer = ctx.data().agent.answer(&question).await?;

    ctx.say(answer.answer).await?;

    Ok(())
}
