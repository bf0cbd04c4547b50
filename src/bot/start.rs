use std::sync::Arc;

use serenity::all::{Client, GatewayIntents, GuildId};

use crate::{
    bot::{command, handler::Handler, state::BotState},
    error::AppError,
};

/// Builds the Discord client with the command framework and event handler.
///
/// Commands are registered in the configured guild once the gateway is ready.
/// The client's HTTP client and cache are shared with the scheduled jobs, so the
/// client is returned unstarted.
///
/// # Arguments
/// - `state` - State shared by commands, handlers and jobs
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started with [`start_bot`]
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(state: Arc<BotState>) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_INVITES;

    let guild_id = GuildId::new(state.config.guild_id);
    let framework_state = state.clone();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: command::commands(),
            on_error: |error| Box::pin(command::on_error(error)),
            pre_command: |ctx| {
                Box::pin(async move {
                    tracing::debug!(
                        command = %ctx.command().qualified_name,
                        user_id = ctx.author().id.get(),
                        "Running command"
                    );
                })
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_in_guild(ctx, &framework.options().commands, guild_id)
                    .await?;
                tracing::info!("Registered {} commands", framework.options().commands.len());

                Ok(framework_state)
            })
        })
        .build();

    let client = Client::builder(&state.config.discord_token, intents)
        .framework(framework)
        .event_handler(Handler::new(state.clone()))
        .await?;

    Ok(client)
}

/// Runs the Discord client until it shuts down.
///
/// Should be called from within a `tokio::spawn` task.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot");

    client.start().await?;

    Ok(())
}
