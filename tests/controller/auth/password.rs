use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pitchside::{
    model::account::ChangePasswordDto,
    server::{controller::auth::change_password, service::account::auth::AuthService},
};
use pitchside_test_utils::prelude::*;

use crate::setup::{register_account, test_state};

fn payload(current: &str, new: &str) -> ChangePasswordDto {
    ChangePasswordDto {
        current_password: current.to_string(),
        new_password: new.to_string(),
        device: None,
    }
}

/// A wrong current password answers 401
#[tokio::test]
async fn rejects_wrong_current_password() -> Result<(), TestError> {
    let state = test_state().await?;
    let current = register_account(&state, "fan@example.com").await?;

    let resp = change_password(
        State(state.clone()),
        current,
        Json(payload("wrong-horse", "brand-new-horse")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// A successful change answers 200 and invalidates the old session token
#[tokio::test]
async fn rotates_sessions_on_change() -> Result<(), TestError> {
    let state = test_state().await?;
    let current = register_account(&state, "fan@example.com").await?;
    let old_token = current.session.token.clone();

    let resp = change_password(
        State(state.clone()),
        current,
        Json(payload("correct-horse", "brand-new-horse")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let stale = AuthService::new(&state.db, state.session_ttl_days)
        .authenticate(&old_token)
        .await;
    assert!(stale.is_err());

    Ok(())
}

/// A new password under eight characters answers 400
#[tokio::test]
async fn rejects_short_new_password() -> Result<(), TestError> {
    let state = test_state().await?;
    let current = register_account(&state, "fan@example.com").await?;

    let resp = change_password(
        State(state.clone()),
        current,
        Json(payload("correct-horse", "short")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
