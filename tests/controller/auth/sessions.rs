use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use pitchside::{
    model::account::LoginDto,
    server::{
        controller::{
            auth::{list_sessions, revoke_session},
            util::current_account::CurrentAccount,
        },
        service::account::auth::AuthService,
    },
};
use pitchside_test_utils::prelude::*;

use crate::setup::{app_err, register_account, test_state};

/// Opens a second session for an already-registered account.
async fn second_session(
    state: &pitchside::server::model::app::AppState,
    email: &str,
) -> Result<CurrentAccount, TestError> {
    let auth_service = AuthService::new(&state.db, state.session_ttl_days);

    let token = auth_service
        .login(LoginDto {
            email: email.to_string(),
            password: "correct-horse".to_string(),
            device: Some("tablet".to_string()),
        })
        .await
        .map_err(app_err)?;

    let (account, session) = auth_service
        .authenticate(&token.token)
        .await
        .map_err(app_err)?;

    Ok(CurrentAccount { account, session })
}

/// The session list flags the authenticating session as current
#[tokio::test]
async fn marks_the_authenticating_session() -> Result<(), TestError> {
    let state = test_state().await?;
    let first = register_account(&state, "fan@example.com").await?;
    second_session(&state, "fan@example.com").await?;

    let sessions = AuthService::new(&state.db, state.session_ttl_days)
        .list_sessions(first.account.id, first.session.id)
        .await
        .map_err(app_err)?;

    assert_eq!(sessions.len(), 2);
    for session in &sessions {
        assert_eq!(session.current, session.id == first.session.id);
    }

    let resp = list_sessions(State(state.clone()), first).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Revoking another session answers 204 and kills its token
#[tokio::test]
async fn revokes_another_session() -> Result<(), TestError> {
    let state = test_state().await?;
    let first = register_account(&state, "fan@example.com").await?;
    let second = second_session(&state, "fan@example.com").await?;
    let revoked_token = second.session.token.clone();

    let resp = revoke_session(State(state.clone()), first, Path(second.session.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let stale = AuthService::new(&state.db, state.session_ttl_days)
        .authenticate(&revoked_token)
        .await;
    assert!(stale.is_err());

    Ok(())
}

/// Revoking the authenticating session answers 400
#[tokio::test]
async fn rejects_self_revoke() -> Result<(), TestError> {
    let state = test_state().await?;
    let current = register_account(&state, "fan@example.com").await?;
    let session_id = current.session.id;

    let resp = revoke_session(State(state.clone()), current, Path(session_id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// A session belonging to another account answers 404
#[tokio::test]
async fn rejects_foreign_session() -> Result<(), TestError> {
    let state = test_state().await?;
    let owner = register_account(&state, "fan@example.com").await?;
    let other = register_account(&state, "rival@example.com").await?;

    let resp = revoke_session(State(state.clone()), other, Path(owner.session.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
