//! Request and response bodies of the internal HTTP API.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of `POST /execute`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteRequestDto {
    /// Command name, e.g. `balance` or `buy`.
    pub command: String,
    /// Member the command runs as.
    pub member_id: u64,
    /// Command-specific arguments.
    #[serde(default)]
    pub args: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteResponseDto {
    pub command: String,
    pub result: serde_json::Value,
}

/// Body of `POST /agent/query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentQueryDto {
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentAnswerDto {
    pub answer: String,
    /// Where the answer came from: `faq`, `model` or `fallback`.
    pub source: String,
    /// Whether the answer was served from the cache.
    pub cached: bool,
}
