//! Error types for the Pitchside server application.
//!
//! Domain errors (catalog lookup, authentication, entitlement) live in their
//! own submodules and implement `IntoResponse` so handlers can bubble them
//! with `?`. The top-level [`Error`] aggregates them together with external
//! library errors via `thiserror`'s `#[from]` conversions.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod entitlement;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, catalog::CatalogError, config::ConfigError,
        entitlement::EntitlementError,
    },
};

/// Main error type for the Pitchside server application.
///
/// # Error categories
/// - Catalog errors (unknown slug, season, or fixture)
/// - Authentication errors (credentials, sessions)
/// - Entitlement errors (quota and feature gating)
/// - Validation errors (malformed input rejected before storage access)
/// - External library errors (database, password hashing)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Catalog lookup error (unknown entity, season, or fixture).
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Authentication error (credentials, session issuance, revocation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Entitlement error (quota exceeded, feature locked to higher tiers).
    #[error(transparent)]
    EntitlementError(#[from] EntitlementError),
    /// Malformed input; rejected before any storage access.
    #[error("Validation failed: {0}")]
    Validation(String),
    /// Password hashing or hash parsing failure.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - validation failures
/// - 401 Unauthorized - authentication failures (uniform message)
/// - 403 Forbidden - quota or tier gate refusals, with the limit payload
/// - 404 Not Found - unknown entities, seasons, fixtures
/// - 409 Conflict - duplicate account email
/// - 500 Internal Server Error - everything else (logged)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::EntitlementError(err) => err.into_response(),
            Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto { error: message }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

// Lets tests bubble application errors with `?` alongside database errors.
#[cfg(test)]
impl From<Error> for pitchside_test_utils::error::TestError {
    fn from(err: Error) -> Self {
        match err {
            Error::DbErr(err) => Self::DbErr(err),
            other => Self::App(other.to_string()),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error server-side and returns a generic message so
/// implementation details never leak to the client.
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
