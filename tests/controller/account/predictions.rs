use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Duration, Utc};
use pitchside::{
    model::account::PredictionRequestDto,
    server::{
        controller::account::submit_prediction,
        service::account::prediction::PredictionService,
    },
};
use pitchside_test_utils::prelude::*;

use crate::setup::{app_err, register_account, test_state};

async fn seeded_fixture(
    db: &sea_orm::DatabaseConnection,
    kickoff: chrono::NaiveDateTime,
) -> Result<entity::fixture::Model, TestError> {
    let competition = insert_competition(db, "premier").await?;
    let season = insert_season(db, "2025/26", date(2025, 8, 1), date(2026, 5, 31), true).await?;
    let edition = insert_competition_season(db, competition.id, season.id).await?;
    let home = insert_team(db, "tigers").await?;
    let away = insert_team(db, "lions").await?;

    Ok(insert_scheduled_fixture(db, edition.id, home.id, away.id, kickoff).await?)
}

/// A prediction before kickoff answers 200 and resubmitting replaces it
#[tokio::test]
async fn accepts_and_replaces_before_kickoff() -> Result<(), TestError> {
    let state = test_state().await?;
    let fan = register_account(&state, "fan@example.com").await?;
    let fixture = seeded_fixture(&state.db, Utc::now().naive_utc() + Duration::days(2)).await?;

    let resp = submit_prediction(
        State(state.clone()),
        fan.clone(),
        Path(fixture.id),
        Json(PredictionRequestDto {
            home_score: 2,
            away_score: 0,
        }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = submit_prediction(
        State(state.clone()),
        fan.clone(),
        Path(fixture.id),
        Json(PredictionRequestDto {
            home_score: 1,
            away_score: 1,
        }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let predictions = PredictionService::new(&state.db)
        .list(fan.account.id)
        .await
        .map_err(app_err)?;
    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0].home_score, 1);
    assert_eq!(predictions[0].away_score, 1);

    Ok(())
}

/// A prediction after kickoff answers 400
#[tokio::test]
async fn rejects_after_kickoff() -> Result<(), TestError> {
    let state = test_state().await?;
    let fan = register_account(&state, "fan@example.com").await?;
    let fixture = seeded_fixture(&state.db, Utc::now().naive_utc() - Duration::hours(1)).await?;

    let resp = submit_prediction(
        State(state.clone()),
        fan,
        Path(fixture.id),
        Json(PredictionRequestDto {
            home_score: 2,
            away_score: 0,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// An unknown fixture answers 404
#[tokio::test]
async fn rejects_unknown_fixture() -> Result<(), TestError> {
    let state = test_state().await?;
    let fan = register_account(&state, "fan@example.com").await?;

    let resp = submit_prediction(
        State(state.clone()),
        fan,
        Path(9999),
        Json(PredictionRequestDto {
            home_score: 2,
            away_score: 0,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
