use std::str::FromStr;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_API_BIND_ADDRESS: &str = "127.0.0.1:8090";
const DEFAULT_AGENT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_AGENT_CACHE_TTL_SECONDS: u64 = 3600;

/// Connection settings for the OpenAI-compatible model behind the support agent.
#[derive(Debug, Clone)]
pub struct AgentModelConfig {
    /// Base URL of the API, e.g. `https://api.openai.com/v1`.
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,

    pub discord_token: String,
    /// Guild the bot manages; commands are registered here.
    pub guild_id: u64,
    /// Voice channel that creates a personal channel when joined.
    pub create_voice_channel_id: Option<u64>,

    pub redis_url: Option<String>,

    pub api_bind_address: String,
    /// Bearer token for `POST /execute`. The route is disabled when unset.
    pub execute_api_token: Option<String>,

    pub payment_feed_url: Option<String>,

    pub agent_model: Option<AgentModelConfig>,
    pub agent_cache_ttl_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let agent_model = match optional_var("AGENT_API_URL") {
            Some(api_url) => Some(AgentModelConfig {
                api_url,
                api_key: required_var("AGENT_API_KEY")?,
                model: optional_var("AGENT_MODEL")
                    .unwrap_or_else(|| DEFAULT_AGENT_MODEL.to_string()),
            }),
            None => None,
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            discord_token: required_var("DISCORD_TOKEN")?,
            guild_id: parse_var("GUILD_ID", required_var("GUILD_ID")?)?,
            create_voice_channel_id: optional_var("CREATE_VOICE_CHANNEL_ID")
                .map(|value| parse_var("CREATE_VOICE_CHANNEL_ID", value))
                .transpose()?,
            redis_url: optional_var("REDIS_URL"),
            api_bind_address: optional_var("API_BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_API_BIND_ADDRESS.to_string()),
            execute_api_token: optional_var("EXECUTE_API_TOKEN"),
            payment_feed_url: optional_var("PAYMENT_FEED_URL"),
            agent_model,
            agent_cache_ttl_seconds: optional_var("AGENT_CACHE_TTL_SECONDS")
                .map(|value| parse_var("AGENT_CACHE_TTL_SECONDS", value))
                .transpose()?
                .unwrap_or(DEFAULT_AGENT_CACHE_TTL_SECONDS),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an optional variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_var<T: FromStr>(name: &str, value: String) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}
