use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Missing, malformed, expired, or revoked bearer token. One variant on
    /// purpose: callers must not be able to distinguish why a token failed.
    #[error("Request is not authenticated")]
    Unauthorized,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("An account with this email already exists")]
    EmailTaken,
    #[error("Session ID {0} not found for this account")]
    SessionNotFound(i32),
    #[error("Notification ID {0} not found for this account")]
    NotificationNotFound(i32),
    #[error("The current session cannot revoke itself; use logout instead")]
    SessionSelfRevoke,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match &self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::SessionNotFound(_) => StatusCode::NOT_FOUND,
            Self::NotificationNotFound(_) => StatusCode::NOT_FOUND,
            Self::SessionSelfRevoke => StatusCode::BAD_REQUEST,
        };

        // Expired, absent, and revoked tokens all surface the same body.
        let message = match &self {
            Self::Unauthorized => "Unauthorized".to_string(),
            other => other.to_string(),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
