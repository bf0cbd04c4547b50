//! Chat model used when no built-in answer matches.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{config::AgentModelConfig, error::AppError};

const SYSTEM_PROMPT: &str = "You are the support assistant of the zaGadka Discord server. \
    Answer briefly and only about the server: premium roles, wallet, voice channels, \
    activity points and moderation. If you do not know, say so.";

#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Answers a user question.
    async fn complete(&self, question: &str) -> Result<String, AppError>;
}

/// Client for an OpenAI-compatible chat completion API.
pub struct OpenAiChatModel {
    http_client: reqwest::Client,
    config: AgentModelConfig,
}

impl OpenAiChatModel {
    pub fn new(http_client: reqwest::Client, config: AgentModelConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    async fn complete(&self, question: &str) -> Result<String, AppError> {
        let url = format!(
            "{}/chat/completions",
            self.config.api_url.trim_end_matches('/')
        );
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: question,
                },
            ],
            max_tokens: 400,
        };

        let response: ChatResponse = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| AppError::InternalError("Chat model returned no answer".to_string()))
    }
}
