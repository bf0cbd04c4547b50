use axum::{extract::State, response::IntoResponse, Json};

use crate::{error::AppError, model::api::AgentQueryDto, state::AppState};

/// Answer a member's question with the support agent.
///
/// # Returns
/// - `200 OK` - `{ answer, source, cached }`
/// - `400 Bad Request` - Empty or overly long question
/// - `500 Internal Server Error` - Unexpected failure
pub async fn query(
    State(state): State<AppState>,
    Json(payload): Json<AgentQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let answer = state.agent.answer(&payload.question).await?;

    Ok(Json(answer))
}
