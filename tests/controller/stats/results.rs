use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pitchside::{model::catalog::ResultDto, server::controller::stats::record_result};
use pitchside_test_utils::prelude::*;

use crate::setup::test_state;

/// An unknown fixture answers 404
#[tokio::test]
async fn rejects_unknown_fixture() -> Result<(), TestError> {
    let state = test_state().await?;

    let resp = record_result(
        State(state.clone()),
        Path(9999),
        Json(ResultDto {
            home_score: 2,
            away_score: 1,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// A negative score answers 400
#[tokio::test]
async fn rejects_negative_score() -> Result<(), TestError> {
    let state = test_state().await?;
    let competition = insert_competition(&state.db, "premier").await?;
    let season = insert_season(&state.db, "2025/26", date(2025, 8, 1), date(2026, 5, 31), true).await?;
    let edition = insert_competition_season(&state.db, competition.id, season.id).await?;
    let home = insert_team(&state.db, "tigers").await?;
    let away = insert_team(&state.db, "lions").await?;
    let fixture = insert_scheduled_fixture(
        &state.db,
        edition.id,
        home.id,
        away.id,
        datetime(2025, 9, 13, 15, 0),
    )
    .await?;

    let resp = record_result(
        State(state.clone()),
        Path(fixture.id),
        Json(ResultDto {
            home_score: -1,
            away_score: 0,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
