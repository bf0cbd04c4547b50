//! Answer cache for the support agent.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};

use crate::error::AppError;

const KEY_PREFIX: &str = "agent:answer:";

/// Cache key for a question: lowercase words without punctuation.
///
/// Questions differing only in case, spacing or punctuation share an answer.
pub fn cache_key(question: &str) -> String {
    format!("{KEY_PREFIX}{}", normalize_question(question))
}

pub fn normalize_question(question: &str) -> String {
    question
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Key-value store holding serialized answers with a time to live.
#[async_trait]
pub trait AnswerStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), AppError>;
}

/// Redis-backed answer store using `GET` and `SETEX`.
#[derive(Clone)]
pub struct RedisAnswerStore {
    connection: ConnectionManager,
}

impl RedisAnswerStore {
    pub fn new(connection: ConnectionManager) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl AnswerStore for RedisAnswerStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let mut connection = self.connection.clone();
        let value: Option<String> = connection.get(key).await?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), AppError> {
        let mut connection = self.connection.clone();
        let _: () = connection.set_ex(key, value, ttl_seconds).await?;

        Ok(())
    }
}

/// In-memory store for tests; ignores the TTL.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryAnswerStore {
    pub entries: tokio::sync::Mutex<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
#[async_trait]
impl AnswerStore for MemoryAnswerStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str, _ttl_seconds: u64) -> Result<(), AppError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
