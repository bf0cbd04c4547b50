use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::error::{auth::AuthError, AppError};

/// Checks the bearer token of an internal API request.
pub struct BearerGuard<'a> {
    expected_token: &'a str,
    headers: &'a HeaderMap,
}

impl<'a> BearerGuard<'a> {
    pub fn new(expected_token: &'a str, headers: &'a HeaderMap) -> Self {
        Self {
            expected_token,
            headers,
        }
    }

    /// # Returns
    /// - `Ok(())` - `Authorization: Bearer <token>` matches the configured token
    /// - `Err(AppError::AuthErr(MissingToken))` - Header absent or not a bearer token
    /// - `Err(AppError::AuthErr(InvalidToken))` - Token does not match
    pub fn require(&self) -> Result<(), AppError> {
        let Some(token) = self
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
        else {
            return Err(AuthError::MissingToken.into());
        };

        if token.trim() != self.expected_token {
            return Err(AuthError::InvalidToken.into());
        }

        Ok(())
    }
}
