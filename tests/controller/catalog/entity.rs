use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use pitchside::{model::catalog::EntityTypeDto, server::controller::catalog::get_entity};
use pitchside_test_utils::prelude::*;

use crate::setup::test_state;

/// A known team slug resolves with 200
#[tokio::test]
async fn resolves_team_by_slug() -> Result<(), TestError> {
    let state = test_state().await?;
    insert_team(&state.db, "tigers").await?;

    let resp = get_entity(
        State(state.clone()),
        Path((EntityTypeDto::Team, "tigers".to_string())),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// An unknown slug answers 404
#[tokio::test]
async fn rejects_unknown_slug() -> Result<(), TestError> {
    let state = test_state().await?;

    let resp = get_entity(
        State(state.clone()),
        Path((EntityTypeDto::Player, "nobody".to_string())),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// A slug of the wrong entity kind answers 404
#[tokio::test]
async fn slug_is_scoped_to_its_kind() -> Result<(), TestError> {
    let state = test_state().await?;
    insert_team(&state.db, "tigers").await?;

    let resp = get_entity(
        State(state.clone()),
        Path((EntityTypeDto::Player, "tigers".to_string())),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
