//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! collected via utoipa into a unified document; Swagger UI serves the
//! interactive documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`; the
/// interactive documentation at `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be
/// served once state is attached.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Pitchside", description = "Pitchside API"), tags(
        (name = controller::catalog::CATALOG_TAG, description = "Entities, seasons, and the affiliation ledger"),
        (name = controller::stats::STATS_TAG, description = "Fixtures, standings, and player stats"),
        (name = controller::auth::AUTH_TAG, description = "Registration, login, and session management"),
        (name = controller::account::ACCOUNT_TAG, description = "Subscriptions, usage, follows, predictions, and notifications"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::catalog::get_entity))
        .routes(routes!(controller::catalog::get_player_teams))
        .routes(routes!(controller::catalog::get_player_history))
        .routes(routes!(controller::catalog::transfer_player))
        .routes(routes!(controller::catalog::release_player))
        .routes(routes!(controller::catalog::get_team_roster))
        .routes(routes!(controller::catalog::get_team_venues))
        .routes(routes!(controller::catalog::move_home_ground))
        .routes(routes!(controller::catalog::list_seasons))
        .routes(routes!(controller::catalog::set_current_season))
        .routes(routes!(controller::catalog::get_competition_seasons))
        .routes(routes!(controller::stats::get_standings))
        .routes(routes!(controller::stats::get_player_stats))
        .routes(routes!(controller::stats::get_top_scorers))
        .routes(routes!(controller::stats::list_fixtures))
        .routes(routes!(
            controller::stats::get_fixture_events,
            controller::stats::record_event
        ))
        .routes(routes!(controller::stats::record_result))
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::list_sessions))
        .routes(routes!(controller::auth::revoke_session))
        .routes(routes!(controller::auth::change_password))
        .routes(routes!(
            controller::account::get_subscription,
            controller::account::change_subscription,
            controller::account::cancel_subscription
        ))
        .routes(routes!(
            controller::account::get_usage,
            controller::account::spend_usage
        ))
        .routes(routes!(
            controller::account::follow,
            controller::account::unfollow,
            controller::account::list_follows
        ))
        .routes(routes!(controller::account::export_account))
        .routes(routes!(controller::account::get_follow_state))
        .routes(routes!(controller::account::fixture_feed))
        .routes(routes!(controller::account::submit_prediction))
        .routes(routes!(controller::account::list_predictions))
        .routes(routes!(controller::account::list_notifications))
        .routes(routes!(controller::account::unread_notifications))
        .routes(routes!(controller::account::mark_notification_read))
        .routes(routes!(controller::account::mark_all_notifications_read))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
