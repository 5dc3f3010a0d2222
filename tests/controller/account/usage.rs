use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use pitchside::{
    model::account::FeatureDto,
    server::{
        controller::account::{get_usage, spend_usage},
        service::entitlement::subscription::SubscriptionService,
    },
};
use pitchside_test_utils::prelude::*;

use crate::setup::{app_err, register_account, test_state};

/// The free comparisons quota allows five spends, then answers 403
#[tokio::test]
async fn free_comparisons_quota_exhausts_at_five() -> Result<(), TestError> {
    let state = test_state().await?;
    let fan = register_account(&state, "fan@example.com").await?;

    for _ in 0..5 {
        let resp = spend_usage(
            State(state.clone()),
            fan.clone(),
            Path(FeatureDto::Comparisons),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = spend_usage(
        State(state.clone()),
        fan.clone(),
        Path(FeatureDto::Comparisons),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Checking never spends.
    let resp = get_usage(State(state.clone()), fan, Path(FeatureDto::Comparisons))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// A boolean feature locked to higher tiers answers 403 on the free tier
#[tokio::test]
async fn locked_feature_rejects_free_tier() -> Result<(), TestError> {
    let state = test_state().await?;
    let fan = register_account(&state, "fan@example.com").await?;

    let resp = spend_usage(
        State(state.clone()),
        fan,
        Path(FeatureDto::AdvancedStats),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Upgrading unlocks the feature for the same account
#[tokio::test]
async fn upgrade_unlocks_the_feature() -> Result<(), TestError> {
    let state = test_state().await?;
    let fan = register_account(&state, "fan@example.com").await?;

    SubscriptionService::new(&state.db)
        .change_tier(fan.account.id, entity::enums::Tier::Pro)
        .await
        .map_err(app_err)?;

    let resp = spend_usage(
        State(state.clone()),
        fan,
        Path(FeatureDto::AdvancedStats),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
