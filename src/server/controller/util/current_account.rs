use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

use crate::server::{
    error::{auth::AuthError, Error},
    model::app::AppState,
    service::account::auth::AuthService,
};

/// The authenticated caller, resolved from the `Authorization: Bearer`
/// header.
///
/// Handlers take this as an argument instead of reading ambient request
/// state, so services always receive an explicit account. Absent,
/// malformed, unknown, and expired tokens all reject with the same
/// `Unauthorized` response.
#[derive(Clone)]
pub struct CurrentAccount {
    pub account: entity::account::Model,
    pub session: entity::session::Model,
}

impl FromRequestParts<AppState> for CurrentAccount {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::Unauthorized)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::Unauthorized)?;

        let (account, session) = AuthService::new(&state.db, state.session_ttl_days)
            .authenticate(token)
            .await?;

        Ok(Self { account, session })
    }
}
