use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::enums::EntityType;
use pitchside::{
    model::{account::FollowRequestDto, catalog::EntityTypeDto},
    server::{controller::account::follow, service::account::follow::FollowService},
};
use pitchside_test_utils::prelude::*;

use crate::setup::{app_err, register_account, test_state};

fn follow_team(team_id: i32) -> FollowRequestDto {
    FollowRequestDto {
        entity_type: EntityTypeDto::Team,
        entity_id: team_id,
    }
}

/// Following an unknown entity answers 404
#[tokio::test]
async fn rejects_unknown_entity() -> Result<(), TestError> {
    let state = test_state().await?;
    let fan = register_account(&state, "fan@example.com").await?;

    let resp = follow(State(state.clone()), fan, Json(follow_team(9999)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Refollowing a followed entity answers 200 without a second row
#[tokio::test]
async fn refollow_is_idempotent() -> Result<(), TestError> {
    let state = test_state().await?;
    let fan = register_account(&state, "fan@example.com").await?;
    let team = insert_team(&state.db, "tigers").await?;

    for _ in 0..2 {
        let resp = follow(
            State(state.clone()),
            fan.clone(),
            Json(follow_team(team.id)),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
    }

    let follows = FollowService::new(&state.db)
        .list(fan.account.id)
        .await
        .map_err(app_err)?;
    assert_eq!(follows.len(), 1);

    Ok(())
}

/// The eleventh distinct follow on the free tier answers 403
#[tokio::test]
async fn enforces_the_free_follow_cap() -> Result<(), TestError> {
    let state = test_state().await?;
    let fan = register_account(&state, "fan@example.com").await?;

    for n in 0..10 {
        let team = insert_team(&state.db, &format!("team-{n}")).await?;
        insert_follow(&state.db, fan.account.id, EntityType::Team, team.id).await?;
    }
    let one_more = insert_team(&state.db, "one-more").await?;

    let resp = follow(State(state.clone()), fan, Json(follow_team(one_more.id)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
