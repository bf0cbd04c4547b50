//! Support agent answering member questions.
//!
//! Answers are looked up cache-aside: a cached answer is returned as-is,
//! otherwise the question is matched against built-in answers and then sent to
//! the chat model. Computed answers are cached with a fixed TTL; fallback
//! replies are not cached so a later attempt can reach the model again.

pub mod cache;
pub mod knowledge;
pub mod model;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    model::api::AgentAnswerDto,
    service::agent::{
        cache::{cache_key, normalize_question, AnswerStore},
        model::ChatModel,
    },
};

const FALLBACK_ANSWER: &str =
    "I could not find an answer to that. Please ask a moderator or open a ticket.";
const MAX_QUESTION_LENGTH: usize = 1000;

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerSource {
    Faq,
    Model,
    Fallback,
}

impl AnswerSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Faq => "faq",
            Self::Model => "model",
            Self::Fallback => "fallback",
        }
    }
}

#[derive(Serialize, Deserialize)]
struct CachedAnswer {
    answer: String,
    source: AnswerSource,
}

/// Shared support agent, cheap to clone.
#[derive(Clone)]
pub struct AgentService {
    store: Option<Arc<dyn AnswerStore>>,
    chat_model: Option<Arc<dyn ChatModel>>,
    ttl_seconds: u64,
}

impl AgentService {
    /// Creates the agent. Without a store nothing is cached; without a chat
    /// model only built-in answers are given.
    pub fn new(
        store: Option<Arc<dyn AnswerStore>>,
        chat_model: Option<Arc<dyn ChatModel>>,
        ttl_seconds: u64,
    ) -> Self {
        Self {
            store,
            chat_model,
            ttl_seconds,
        }
    }

    /// Answers a question.
    ///
    /// Cache and chat model failures are logged and do not fail the request.
    ///
    /// # Returns
    /// - `Ok(AgentAnswerDto)` - Answer with its source
    /// - `Err(AppError::BadRequest)` - Empty or overly long question
    pub async fn answer(&self, question: &str) -> Result<AgentAnswerDto, AppError> {
        let question = question.trim();
        if normalize_question(question).is_empty() {
            return Err(AppError::BadRequest("Question cannot be empty".to_string()));
        }
        if question.chars().count() > MAX_QUESTION_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Question cannot be longer than {MAX_QUESTION_LENGTH} characters"
            )));
        }

        let key = cache_key(question);

        if let Some(cached) = self.cached(&key).await {
            return Ok(AgentAnswerDto {
                answer: cached.answer,
                source: cached.source.as_str().to_string(),
                cached: true,
            });
        }

        let (answer, source) = self.compute(question).await;

        if source != AnswerSource::Fallback {
            self.store_answer(&key, &answer, source).await;
        }

        Ok(AgentAnswerDto {
            answer,
            source: source.as_str().to_string(),
            cached: false,
        })
    }

    async fn compute(&self, question: &str) -> (String, AnswerSource) {
        if let Some(answer) = knowledge::find_answer(&normalize_question(question)) {
            return (answer.to_string(), AnswerSource::Faq);
        }

        if let Some(chat_model) = &self.chat_model {
            match chat_model.complete(question).await {
                Ok(answer) => return (answer, AnswerSource::Model),
                Err(e) => tracing::error!("Chat model request failed: {}", e),
            }
        }

        (FALLBACK_ANSWER.to_string(), AnswerSource::Fallback)
    }

    async fn cached(&self, key: &str) -> Option<CachedAnswer> {
        let store = self.store.as_ref()?;

        match store.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(cached) => Some(cached),
                Err(e) => {
                    tracing::warn!(key, "Discarding unreadable cached answer: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(key, "Answer cache lookup failed: {}", e);
                None
            }
        }
    }

    async fn store_answer(&self, key: &str, answer: &str, source: AnswerSource) {
        let Some(store) = &self.store else {
            return;
        };

        let raw = match serde_json::to_string(&CachedAnswer {
            answer: answer.to_string(),
            source,
        }) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to serialize answer for cache: {}", e);
                return;
            }
        };

        if let Err(e) = store.set(key, &raw, self.ttl_seconds).await {
            tracing::warn!(key, "Failed to cache answer: {}", e);
        }
    }
}
