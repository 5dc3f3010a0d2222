use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        account::{
            ChangeTierDto, ExportDto, FeatureDto, FollowDto, FollowRequestDto, FollowStateDto,
            NotificationDto, PredictionDto, PredictionRequestDto, SubscriptionDto, UnreadCountDto,
            UsageDto,
        },
        api::{ErrorDto, QuotaErrorDto},
        catalog::{EntityTypeDto, FixtureDto},
    },
    server::{
        controller::util::{current_account::CurrentAccount, pagination::PageQuery},
        error::Error,
        model::app::AppState,
        service::{
            account::{
                follow::FollowService, notification::NotificationService,
                prediction::PredictionService,
            },
            entitlement::{subscription::SubscriptionService, usage::UsageService},
        },
    },
};

pub static ACCOUNT_TAG: &str = "account";

#[derive(Deserialize, IntoParams)]
pub struct FeedQuery {
    /// Number of fixtures, at most 100. Defaults to 20.
    pub limit: Option<i64>,
}

/// Get the current account's subscription
#[utoipa::path(
    get,
    path = "/api/account/subscription",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Subscription with its effective tier", body = SubscriptionDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscription(
    State(state): State<AppState>,
    current: CurrentAccount,
) -> Result<impl IntoResponse, Error> {
    let subscription = SubscriptionService::new(&state.db)
        .view(current.account.id)
        .await?;

    Ok((StatusCode::OK, Json(subscription)))
}

/// Change the subscription tier
#[utoipa::path(
    post,
    path = "/api/account/subscription",
    tag = ACCOUNT_TAG,
    request_body = ChangeTierDto,
    responses(
        (status = 200, description = "Tier replaced", body = SubscriptionDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_subscription(
    State(state): State<AppState>,
    current: CurrentAccount,
    Json(request): Json<ChangeTierDto>,
) -> Result<impl IntoResponse, Error> {
    let subscription = SubscriptionService::new(&state.db)
        .change_tier(current.account.id, request.tier.into())
        .await?;

    Ok((StatusCode::OK, Json(subscription)))
}

/// Cancel the subscription, keeping benefits until the period ends
#[utoipa::path(
    delete,
    path = "/api/account/subscription",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Auto-renew turned off", body = SubscriptionDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_subscription(
    State(state): State<AppState>,
    current: CurrentAccount,
) -> Result<impl IntoResponse, Error> {
    let subscription = SubscriptionService::new(&state.db)
        .cancel(current.account.id)
        .await?;

    Ok((StatusCode::OK, Json(subscription)))
}

/// Get today's usage for a feature without spending
#[utoipa::path(
    get,
    path = "/api/account/usage/{feature}",
    tag = ACCOUNT_TAG,
    params(("feature" = FeatureDto, Path, description = "Feature to check")),
    responses(
        (status = 200, description = "Usage against today's quota", body = UsageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_usage(
    State(state): State<AppState>,
    current: CurrentAccount,
    Path(feature): Path<FeatureDto>,
) -> Result<impl IntoResponse, Error> {
    let usage = UsageService::new(&state.db)
        .usage(current.account.id, feature.into())
        .await?;

    Ok((StatusCode::OK, Json(usage)))
}

/// Spend one unit of a feature's daily quota
#[utoipa::path(
    post,
    path = "/api/account/usage/{feature}",
    tag = ACCOUNT_TAG,
    params(("feature" = FeatureDto, Path, description = "Feature to spend")),
    responses(
        (status = 200, description = "Unit spent", body = UsageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Quota exhausted or feature locked", body = QuotaErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn spend_usage(
    State(state): State<AppState>,
    current: CurrentAccount,
    Path(feature): Path<FeatureDto>,
) -> Result<impl IntoResponse, Error> {
    let usage_service = UsageService::new(&state.db);

    usage_service
        .require_feature(current.account.id, feature.into())
        .await?;
    let usage = usage_service
        .spend(current.account.id, feature.into())
        .await?;

    Ok((StatusCode::OK, Json(usage)))
}

/// Export the account's stored data
#[utoipa::path(
    get,
    path = "/api/account/export",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Profile, follows, and predictions", body = ExportDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Export requires a higher tier", body = QuotaErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_account(
    State(state): State<AppState>,
    current: CurrentAccount,
) -> Result<impl IntoResponse, Error> {
    UsageService::new(&state.db)
        .require_feature(current.account.id, entity::enums::Feature::DataExport)
        .await?;

    let follows = FollowService::new(&state.db).list(current.account.id).await?;
    let predictions = PredictionService::new(&state.db)
        .list(current.account.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ExportDto {
            account: current.account.into(),
            follows,
            predictions,
        }),
    ))
}

/// Follow an entity
#[utoipa::path(
    post,
    path = "/api/account/follows",
    tag = ACCOUNT_TAG,
    request_body = FollowRequestDto,
    responses(
        (status = 200, description = "Following; repeat calls answer the same", body = FollowStateDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Follow cap reached", body = QuotaErrorDto),
        (status = 404, description = "Unknown entity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn follow(
    State(state): State<AppState>,
    current: CurrentAccount,
    Json(request): Json<FollowRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let followed = FollowService::new(&state.db)
        .follow(current.account.id, request)
        .await?;

    Ok((StatusCode::OK, Json(followed)))
}

/// Unfollow an entity
#[utoipa::path(
    delete,
    path = "/api/account/follows",
    tag = ACCOUNT_TAG,
    request_body = FollowRequestDto,
    responses(
        (status = 200, description = "Not following; idempotent", body = FollowStateDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unfollow(
    State(state): State<AppState>,
    current: CurrentAccount,
    Json(request): Json<FollowRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let unfollowed = FollowService::new(&state.db)
        .unfollow(current.account.id, request)
        .await?;

    Ok((StatusCode::OK, Json(unfollowed)))
}

/// List the current account's follows
#[utoipa::path(
    get,
    path = "/api/account/follows",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Follows, oldest first", body = Vec<FollowDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_follows(
    State(state): State<AppState>,
    current: CurrentAccount,
) -> Result<impl IntoResponse, Error> {
    let follows = FollowService::new(&state.db).list(current.account.id).await?;

    Ok((StatusCode::OK, Json(follows)))
}

/// Check whether the current account follows an entity
#[utoipa::path(
    get,
    path = "/api/account/follows/{entity_type}/{entity_id}",
    tag = ACCOUNT_TAG,
    params(
        ("entity_type" = EntityTypeDto, Path, description = "Entity kind"),
        ("entity_id" = i32, Path, description = "Entity ID"),
    ),
    responses(
        (status = 200, description = "Follow state", body = FollowStateDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_follow_state(
    State(state): State<AppState>,
    current: CurrentAccount,
    Path((entity_type, entity_id)): Path<(EntityTypeDto, i32)>,
) -> Result<impl IntoResponse, Error> {
    let followed = FollowService::new(&state.db)
        .state(current.account.id, entity_type, entity_id)
        .await?;

    Ok((StatusCode::OK, Json(followed)))
}

/// Get upcoming fixtures of followed teams
#[utoipa::path(
    get,
    path = "/api/account/feed",
    tag = ACCOUNT_TAG,
    params(FeedQuery),
    responses(
        (status = 200, description = "Upcoming fixtures, soonest first", body = Vec<FixtureDto>),
        (status = 400, description = "Limit out of range", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn fixture_feed(
    State(state): State<AppState>,
    current: CurrentAccount,
    Query(query): Query<FeedQuery>,
) -> Result<impl IntoResponse, Error> {
    let limit = query.limit.unwrap_or(20);
    if !(1..=100).contains(&limit) {
        return Err(Error::Validation(
            "Limit must fall between 1 and 100".to_string(),
        ));
    }

    let fixtures = FollowService::new(&state.db)
        .fixture_feed(current.account.id, limit as u64)
        .await?;

    Ok((StatusCode::OK, Json(fixtures)))
}

/// Submit or replace a prediction for a fixture
#[utoipa::path(
    put,
    path = "/api/account/predictions/{fixture_id}",
    tag = ACCOUNT_TAG,
    params(("fixture_id" = i32, Path, description = "Fixture ID")),
    request_body = PredictionRequestDto,
    responses(
        (status = 200, description = "Prediction stored", body = PredictionDto),
        (status = 400, description = "Negative score or kickoff already passed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Unknown fixture", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_prediction(
    State(state): State<AppState>,
    current: CurrentAccount,
    Path(fixture_id): Path<i32>,
    Json(request): Json<PredictionRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let prediction = PredictionService::new(&state.db)
        .submit(current.account.id, fixture_id, request)
        .await?;

    Ok((StatusCode::OK, Json(prediction)))
}

/// List the current account's predictions
#[utoipa::path(
    get,
    path = "/api/account/predictions",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Predictions, most recently updated first", body = Vec<PredictionDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_predictions(
    State(state): State<AppState>,
    current: CurrentAccount,
) -> Result<impl IntoResponse, Error> {
    let predictions = PredictionService::new(&state.db)
        .list(current.account.id)
        .await?;

    Ok((StatusCode::OK, Json(predictions)))
}

/// List the current account's notifications
#[utoipa::path(
    get,
    path = "/api/account/notifications",
    tag = ACCOUNT_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Notifications, newest first", body = Vec<NotificationDto>),
        (status = 400, description = "Page bounds out of range", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    current: CurrentAccount,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let (limit, offset) = page.resolve()?;

    let notifications = NotificationService::new(&state.db)
        .list(current.account.id, limit, offset)
        .await?;

    Ok((StatusCode::OK, Json(notifications)))
}

/// Count the current account's unread notifications
#[utoipa::path(
    get,
    path = "/api/account/notifications/unread",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Unread count", body = UnreadCountDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unread_notifications(
    State(state): State<AppState>,
    current: CurrentAccount,
) -> Result<impl IntoResponse, Error> {
    let unread = NotificationService::new(&state.db)
        .unread_count(current.account.id)
        .await?;

    Ok((StatusCode::OK, Json(UnreadCountDto { unread })))
}

/// Mark one notification read
#[utoipa::path(
    post,
    path = "/api/account/notifications/{id}/read",
    tag = ACCOUNT_TAG,
    params(("id" = i32, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Notification marked read", body = NotificationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found for this account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    current: CurrentAccount,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let notification = NotificationService::new(&state.db)
        .mark_read(current.account.id, notification_id)
        .await?;

    Ok((StatusCode::OK, Json(notification)))
}

/// Mark every notification read
#[utoipa::path(
    post,
    path = "/api/account/notifications/read-all",
    tag = ACCOUNT_TAG,
    responses(
        (status = 204, description = "All notifications marked read"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    current: CurrentAccount,
) -> Result<impl IntoResponse, Error> {
    NotificationService::new(&state.db)
        .mark_all_read(current.account.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
