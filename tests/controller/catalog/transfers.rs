use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::enums::AffiliationKind;
use pitchside::{
    model::catalog::{AffiliationKindDto, EndAffiliationDto, TransferDto},
    server::{
        controller::catalog::{release_player, transfer_player},
        service::catalog::affiliation::AffiliationService,
    },
};
use pitchside_test_utils::prelude::*;

use crate::setup::{app_err, test_state};

/// A transfer answers 201 and closes the old stint the day before
#[tokio::test]
async fn transfer_closes_the_open_stint() -> Result<(), TestError> {
    let state = test_state().await?;
    let player = insert_player(&state.db, "jo-striker").await?;
    let old_team = insert_team(&state.db, "tigers").await?;
    insert_team(&state.db, "lions").await?;
    insert_affiliation(
        &state.db,
        player.id,
        old_team.id,
        AffiliationKind::Contract,
        date(2024, 7, 1),
        None,
    )
    .await?;

    let resp = transfer_player(
        State(state.clone()),
        Path("jo-striker".to_string()),
        Json(TransferDto {
            team_slug: "lions".to_string(),
            kind: AffiliationKindDto::Contract,
            effective_date: date(2025, 1, 15),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);

    let history = AffiliationService::new(&state.db)
        .player_history("jo-striker")
        .await
        .map_err(app_err)?;

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].valid_to, Some(date(2025, 1, 14)));
    assert_eq!(history[1].entity_slug, "lions");
    assert_eq!(history[1].valid_to, None);

    Ok(())
}

/// A transfer dated before the open stint started answers 400
#[tokio::test]
async fn rejects_transfer_before_stint_start() -> Result<(), TestError> {
    let state = test_state().await?;
    let player = insert_player(&state.db, "jo-striker").await?;
    let old_team = insert_team(&state.db, "tigers").await?;
    insert_team(&state.db, "lions").await?;
    insert_affiliation(
        &state.db,
        player.id,
        old_team.id,
        AffiliationKind::Contract,
        date(2024, 7, 1),
        None,
    )
    .await?;

    let resp = transfer_player(
        State(state.clone()),
        Path("jo-striker".to_string()),
        Json(TransferDto {
            team_slug: "lions".to_string(),
            kind: AffiliationKindDto::Contract,
            effective_date: date(2024, 6, 1),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Releasing a player with no open stint answers 404
#[tokio::test]
async fn release_requires_an_open_stint() -> Result<(), TestError> {
    let state = test_state().await?;
    insert_player(&state.db, "jo-striker").await?;

    let resp = release_player(
        State(state.clone()),
        Path("jo-striker".to_string()),
        Json(EndAffiliationDto {
            kind: AffiliationKindDto::Contract,
            end_date: date(2025, 6, 30),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
