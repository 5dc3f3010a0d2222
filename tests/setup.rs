use pitchside::{
    model::account::RegisterDto,
    server::{
        controller::util::current_account::CurrentAccount, error::Error, model::app::AppState,
        service::account::auth::AuthService,
    },
};
use pitchside_test_utils::prelude::*;

pub const SESSION_TTL_DAYS: i64 = 30;

/// Application state over a fresh in-memory database with every table
/// created.
pub async fn test_state() -> Result<AppState, TestError> {
    let test = test_context_with_all_tables().await?;

    Ok(AppState {
        db: test.db,
        session_ttl_days: SESSION_TTL_DAYS,
    })
}

/// Registers an account and resolves its first session, yielding the
/// extractor value protected handlers take.
pub async fn register_account(
    state: &AppState,
    email: &str,
) -> Result<CurrentAccount, TestError> {
    let auth_service = AuthService::new(&state.db, state.session_ttl_days);

    let (_, token) = auth_service
        .register(RegisterDto {
            email: email.to_string(),
            display_name: "Fan".to_string(),
            password: "correct-horse".to_string(),
        })
        .await
        .map_err(app_err)?;

    let (account, session) = auth_service
        .authenticate(&token.token)
        .await
        .map_err(app_err)?;

    Ok(CurrentAccount { account, session })
}

pub fn app_err(err: Error) -> TestError {
    TestError::App(err.to_string())
}
