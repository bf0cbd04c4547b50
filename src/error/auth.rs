use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request to an internal endpoint carried no bearer token.
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token did not match the configured token.
    #[error("Invalid bearer token")]
    InvalidToken,
}

/// Converts authentication errors into 401 Unauthorized responses.
///
/// Both variants share one client-facing message so callers cannot probe
/// which check failed.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected internal API request: {}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}
