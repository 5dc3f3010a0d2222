use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::enums::EntityType;
use pitchside::{
    model::catalog::ResultDto,
    server::{
        controller::{
            catalog::SeasonQuery,
            stats::{get_standings, record_result},
        },
        model::temporal::TemporalContext,
        service::{account::notification::NotificationService, stats::standings::StandingsService},
    },
};
use pitchside_test_utils::prelude::*;

use crate::setup::{app_err, register_account, test_state};

/// Recording a result through the handler rebuilds the table, orders it by
/// points, and notifies followers of both teams
#[tokio::test]
async fn result_feeds_table_and_followers() -> Result<(), TestError> {
    let state = test_state().await?;
    let competition = insert_competition(&state.db, "premier").await?;
    let season = insert_season(&state.db, "2025/26", date(2025, 8, 1), date(2026, 5, 31), true).await?;
    let edition = insert_competition_season(&state.db, competition.id, season.id).await?;
    let tigers = insert_team(&state.db, "tigers").await?;
    let lions = insert_team(&state.db, "lions").await?;

    let fan = register_account(&state, "fan@example.com").await?;
    insert_follow(&state.db, fan.account.id, EntityType::Team, tigers.id).await?;

    let fixture = insert_scheduled_fixture(
        &state.db,
        edition.id,
        tigers.id,
        lions.id,
        datetime(2025, 9, 13, 15, 0),
    )
    .await?;

    let resp = record_result(
        State(state.clone()),
        Path(fixture.id),
        Json(ResultDto {
            home_score: 3,
            away_score: 1,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let table = StandingsService::new(&state.db)
        .table("premier", TemporalContext::Current)
        .await
        .map_err(app_err)?;

    assert_eq!(table.len(), 2);
    assert_eq!(table[0].team_name, tigers.name);
    assert_eq!(table[0].points, 3);
    assert_eq!(table[0].position, 1);
    assert_eq!(table[1].team_name, lions.name);
    assert_eq!(table[1].points, 0);

    let unread = NotificationService::new(&state.db)
        .unread_count(fan.account.id)
        .await
        .map_err(app_err)?;
    assert_eq!(unread, 1);

    let resp = get_standings(
        State(state.clone()),
        Path("premier".to_string()),
        Query(SeasonQuery { season_id: None }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// A competition with no season edition answers 404
#[tokio::test]
async fn rejects_competition_without_edition() -> Result<(), TestError> {
    let state = test_state().await?;
    insert_competition(&state.db, "premier").await?;
    insert_season(&state.db, "2025/26", date(2025, 8, 1), date(2026, 5, 31), true).await?;

    let resp = get_standings(
        State(state.clone()),
        Path("premier".to_string()),
        Query(SeasonQuery { season_id: None }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
