//! Error types and response handling.
//!
//! `AppError` is the top-level error type shared by bot commands, scheduled jobs
//! and the internal HTTP API. Domain errors carry messages meant for Discord users;
//! infrastructure errors are logged and replaced by a generic message before they
//! reach a user or an HTTP client.

pub mod auth;
pub mod config;
pub mod economy;
pub mod internal;
pub mod moderation;
pub mod voice;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{
        auth::AuthError, config::ConfigError, economy::EconomyError, internal::InternalError,
        moderation::ModerationError, voice::VoiceError,
    },
    model::api::ErrorDto,
};

const GENERIC_USER_MESSAGE: &str = "Something went wrong, please try again later.";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Internal API authentication error.
    ///
    /// Delegates to `AuthError::into_response()` for the 401 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Wallet, shop or payment rule violation.
    #[error(transparent)]
    EconomyErr(#[from] EconomyError),

    /// Voice channel management rule violation.
    #[error(transparent)]
    VoiceErr(#[from] VoiceError),

    /// Moderation or role-switch rule violation.
    #[error(transparent)]
    ModerationErr(#[from] ModerationError),

    /// Unexpected internal state, usually corrupt stored data.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Redis cache error.
    #[error(transparent)]
    RedisErr(#[from] redis::RedisError),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Socket error while binding the internal API listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    #[error("{0}")]
    BadRequest(String),

    /// Caller lacks the rights for the requested action.
    #[error("{0}")]
    Forbidden(String),

    /// Internal error with custom message, logged but never shown.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Text to show a Discord user when a command fails with this error.
    ///
    /// Domain and request errors are shown verbatim; infrastructure failures are
    /// replaced by a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::EconomyErr(err) => err.to_string(),
            Self::VoiceErr(err) => err.to_string(),
            Self::ModerationErr(err) => err.to_string(),
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::Forbidden(msg) => msg.clone(),
            _ => GENERIC_USER_MESSAGE.to_string(),
        }
    }

    /// Whether the error is a rule violation caused by the user rather than a fault.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::EconomyErr(_)
                | Self::VoiceErr(_)
                | Self::ModerationErr(_)
                | Self::NotFound(_)
                | Self::BadRequest(_)
                | Self::Forbidden(_)
        )
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and domain rule violations
/// - 401 Unauthorized - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 403 Forbidden - For `Forbidden`
/// - 404 Not Found - For `NotFound` and unknown payments
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::EconomyErr(EconomyError::PaymentNotFound(id)) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: EconomyError::PaymentNotFound(id).to_string(),
                }),
            )
                .into_response(),
            Self::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: msg })).into_response()
            }
            err if err.is_user_error() => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.user_message(),
                }),
            )
                .into_response(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                InternalServerError("internal error").into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
