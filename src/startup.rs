use std::sync::Arc;

use redis::aio::ConnectionManager;

use crate::{
    config::Config,
    error::AppError,
    service::agent::{
        cache::{AnswerStore, RedisAnswerStore},
        model::{ChatModel, OpenAiChatModel},
        AgentService,
    },
};

const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

/// Installs the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG`, falling back to `info,sqlx=warn`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then runs all pending SeaORM migrations so the schema is up to date before
/// the bot or the API touch the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connects to Redis when `REDIS_URL` is set.
///
/// The connection manager reconnects on its own after connection loss.
///
/// # Returns
/// - `Ok(Some(ConnectionManager))` - Connected
/// - `Ok(None)` - Redis not configured, answers will not be cached
/// - `Err(AppError::RedisErr)` - Invalid URL or initial connection failure
pub async fn connect_to_redis(config: &Config) -> Result<Option<ConnectionManager>, AppError> {
    let Some(url) = &config.redis_url else {
        return Ok(None);
    };

    let client = redis::Client::open(url.as_str())?;
    let manager = ConnectionManager::new(client).await?;

    Ok(Some(manager))
}

/// HTTP client for the payment feed and the chat model.
///
/// Redirects are disabled to prevent SSRF through configured URLs.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    Ok(client)
}

/// Builds the support agent from the optional cache and model settings.
pub fn setup_agent(
    config: &Config,
    redis: Option<ConnectionManager>,
    http_client: reqwest::Client,
) -> AgentService {
    let store = redis.map(|connection| {
        Arc::new(RedisAnswerStore::new(connection)) as Arc<dyn AnswerStore>
    });
    let chat_model = config.agent_model.clone().map(|model_config| {
        Arc::new(OpenAiChatModel::new(http_client, model_config)) as Arc<dyn ChatModel>
    });

    if store.is_none() {
        tracing::info!("REDIS_URL not set, support answers will not be cached");
    }
    if chat_model.is_none() {
        tracing::info!("AGENT_API_URL not set, support agent answers from the FAQ only");
    }

    AgentService::new(store, chat_model, config.agent_cache_ttl_seconds)
}
