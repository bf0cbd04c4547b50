mod bot;
mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use tower_http::trace::TraceLayer;

use crate::{bot::state::BotState, config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let redis = startup::connect_to_redis(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let agent = startup::setup_agent(&config, redis, http_client.clone());

    tracing::info!("Starting zgdk");

    // Initialize Discord bot and share its HTTP client and cache with the jobs
    let bot_state = Arc::new(BotState::new(db.clone(), config.clone(), agent.clone()));
    let client = bot::start::init_bot(bot_state).await?;
    let discord_http = client.http.clone();
    let discord_cache = client.cache.clone();

    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    scheduler::start_scheduler(
        db.clone(),
        discord_http,
        discord_cache,
        &config,
        http_client,
    )
    .await?;

    let execute_enabled = config.execute_api_token.is_some();
    if !execute_enabled {
        tracing::info!("EXECUTE_API_TOKEN not set, /execute is disabled");
    }

    let bind_address = config.api_bind_address.clone();
    let app = router::router(execute_enabled)
        .with_state(AppState::new(db, agent, Arc::new(config)))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Internal API listening on {}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
