use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use pitchside::server::{
    controller::account::{mark_all_notifications_read, mark_notification_read},
    service::account::notification::NotificationService,
};
use pitchside_test_utils::prelude::*;

use crate::setup::{app_err, register_account, test_state};

/// Marking a notification of another account answers 404
#[tokio::test]
async fn rejects_foreign_notification() -> Result<(), TestError> {
    let state = test_state().await?;
    let owner = register_account(&state, "fan@example.com").await?;
    let other = register_account(&state, "rival@example.com").await?;
    let notification =
        insert_notification(&state.db, owner.account.id, "result", "Full time").await?;

    let resp = mark_notification_read(State(state.clone()), other, Path(notification.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Marking one notification read drops the unread count by one
#[tokio::test]
async fn mark_read_updates_the_unread_count() -> Result<(), TestError> {
    let state = test_state().await?;
    let fan = register_account(&state, "fan@example.com").await?;
    let first = insert_notification(&state.db, fan.account.id, "result", "Full time").await?;
    insert_notification(&state.db, fan.account.id, "result", "Full time again").await?;

    let resp = mark_notification_read(State(state.clone()), fan.clone(), Path(first.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let unread = NotificationService::new(&state.db)
        .unread_count(fan.account.id)
        .await
        .map_err(app_err)?;
    assert_eq!(unread, 1);

    Ok(())
}

/// Read-all answers 204 and leaves nothing unread
#[tokio::test]
async fn read_all_clears_the_count() -> Result<(), TestError> {
    let state = test_state().await?;
    let fan = register_account(&state, "fan@example.com").await?;
    insert_notification(&state.db, fan.account.id, "result", "Full time").await?;
    insert_notification(&state.db, fan.account.id, "transfer", "Done deal").await?;

    let resp = mark_all_notifications_read(State(state.clone()), fan.clone())
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let unread = NotificationService::new(&state.db)
        .unread_count(fan.account.id)
        .await
        .map_err(app_err)?;
    assert_eq!(unread, 0);

    Ok(())
}
