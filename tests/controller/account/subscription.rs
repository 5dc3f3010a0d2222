use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pitchside::{
    model::account::{ChangeTierDto, TierDto},
    server::{
        controller::account::{cancel_subscription, change_subscription, get_subscription},
        service::entitlement::subscription::SubscriptionService,
    },
};
use pitchside_test_utils::prelude::*;

use crate::setup::{app_err, register_account, test_state};

/// A fresh account reads as free with no end date
#[tokio::test]
async fn fresh_account_is_free() -> Result<(), TestError> {
    let state = test_state().await?;
    let fan = register_account(&state, "fan@example.com").await?;
    let account_id = fan.account.id;

    let resp = get_subscription(State(state.clone()), fan).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let view = SubscriptionService::new(&state.db)
        .view(account_id)
        .await
        .map_err(app_err)?;
    assert_eq!(view.effective_tier, "free");
    assert!(view.end_date.is_none());

    Ok(())
}

/// Upgrading answers 200 and starts a paid period
#[tokio::test]
async fn upgrade_starts_a_paid_period() -> Result<(), TestError> {
    let state = test_state().await?;
    let fan = register_account(&state, "fan@example.com").await?;
    let account_id = fan.account.id;

    let resp = change_subscription(
        State(state.clone()),
        fan,
        Json(ChangeTierDto { tier: TierDto::Pro }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let view = SubscriptionService::new(&state.db)
        .view(account_id)
        .await
        .map_err(app_err)?;
    assert_eq!(view.effective_tier, "pro");
    assert!(view.end_date.is_some());

    Ok(())
}

/// Cancelling answers 200 and keeps the tier until the period end
#[tokio::test]
async fn cancel_keeps_access_until_period_end() -> Result<(), TestError> {
    let state = test_state().await?;
    let fan = register_account(&state, "fan@example.com").await?;
    let account_id = fan.account.id;

    SubscriptionService::new(&state.db)
        .change_tier(account_id, entity::enums::Tier::Pro)
        .await
        .map_err(app_err)?;

    let resp = cancel_subscription(State(state.clone()), fan).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let view = SubscriptionService::new(&state.db)
        .view(account_id)
        .await
        .map_err(app_err)?;
    assert_eq!(view.effective_tier, "pro");
    assert!(view.end_date.is_some());

    Ok(())
}
