use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pitchside::{model::account::RegisterDto, server::controller::auth::register};
use pitchside_test_utils::prelude::*;

use crate::setup::test_state;

fn payload(email: &str, password: &str) -> RegisterDto {
    RegisterDto {
        email: email.to_string(),
        display_name: "Fan".to_string(),
        password: password.to_string(),
    }
}

/// Registration answers 201 with an account and a session token
#[tokio::test]
async fn creates_account_with_token() -> Result<(), TestError> {
    let state = test_state().await?;

    let result = register(
        State(state.clone()),
        Json(payload("fan@example.com", "correct-horse")),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// A second registration with the same email answers 409
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), TestError> {
    let state = test_state().await?;

    register(
        State(state.clone()),
        Json(payload("fan@example.com", "correct-horse")),
    )
    .await
    .into_response();

    let resp = register(
        State(state.clone()),
        Json(payload("FAN@example.com", "another-horse")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// A password under eight characters answers 400
#[tokio::test]
async fn rejects_short_password() -> Result<(), TestError> {
    let state = test_state().await?;

    let resp = register(
        State(state.clone()),
        Json(payload("fan@example.com", "short")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
