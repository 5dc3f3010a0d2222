use axum::{extract::State, http::StatusCode, response::IntoResponse};
use pitchside::server::{
    controller::account::export_account,
    service::entitlement::subscription::SubscriptionService,
};
use pitchside_test_utils::prelude::*;

use crate::setup::{app_err, register_account, test_state};

/// Data export is locked on the free tier
#[tokio::test]
async fn rejects_free_tier() -> Result<(), TestError> {
    let state = test_state().await?;
    let fan = register_account(&state, "fan@example.com").await?;

    let resp = export_account(State(state.clone()), fan).await.into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// An ultimate account exports with 200
#[tokio::test]
async fn exports_on_ultimate() -> Result<(), TestError> {
    let state = test_state().await?;
    let fan = register_account(&state, "fan@example.com").await?;

    SubscriptionService::new(&state.db)
        .change_tier(fan.account.id, entity::enums::Tier::Ultimate)
        .await
        .map_err(app_err)?;

    let resp = export_account(State(state.clone()), fan).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
