use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        catalog::{
            AffiliationDto, EndAffiliationDto, EntityDto, EntityTypeDto, MoveHomeGroundDto,
            SeasonDto, TransferDto,
        },
    },
    server::{
        error::Error,
        model::{app::AppState, temporal::TemporalContext},
        service::catalog::{
            affiliation::AffiliationService, entity::EntityService, season::SeasonService,
        },
    },
};

pub static CATALOG_TAG: &str = "catalog";

/// Optional season scope; the current season applies when omitted.
#[derive(Deserialize, IntoParams)]
pub struct SeasonQuery {
    pub season_id: Option<i32>,
}

/// Resolve an entity by type and slug
#[utoipa::path(
    get,
    path = "/api/{entity_type}/{slug}",
    tag = CATALOG_TAG,
    params(
        ("entity_type" = EntityTypeDto, Path, description = "Entity kind"),
        ("slug" = String, Path, description = "Public slug"),
    ),
    responses(
        (status = 200, description = "Entity found", body = EntityDto),
        (status = 404, description = "Unknown slug", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_entity(
    State(state): State<AppState>,
    Path((entity_type, slug)): Path<(EntityTypeDto, String)>,
) -> Result<impl IntoResponse, Error> {
    let entity = EntityService::new(&state.db).resolve(entity_type, &slug).await?;

    Ok((StatusCode::OK, Json(entity)))
}

/// Get the teams a player is affiliated with in a season context
#[utoipa::path(
    get,
    path = "/api/players/{slug}/teams",
    tag = CATALOG_TAG,
    params(
        ("slug" = String, Path, description = "Player slug"),
        SeasonQuery,
    ),
    responses(
        (status = 200, description = "Affiliations in the context window", body = Vec<AffiliationDto>),
        (status = 404, description = "Unknown player or season", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player_teams(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<SeasonQuery>,
) -> Result<impl IntoResponse, Error> {
    let ctx = TemporalContext::from_season_param(query.season_id);

    let affiliations = AffiliationService::new(&state.db)
        .player_teams(&slug, ctx, Utc::now().date_naive())
        .await?;

    Ok((StatusCode::OK, Json(affiliations)))
}

/// Get a player's full affiliation history, oldest first
#[utoipa::path(
    get,
    path = "/api/players/{slug}/affiliations",
    tag = CATALOG_TAG,
    params(("slug" = String, Path, description = "Player slug")),
    responses(
        (status = 200, description = "Full ledger for the player", body = Vec<AffiliationDto>),
        (status = 404, description = "Unknown player", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player_history(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let history = AffiliationService::new(&state.db).player_history(&slug).await?;

    Ok((StatusCode::OK, Json(history)))
}

/// Transfer a player to a new team
#[utoipa::path(
    post,
    path = "/api/players/{slug}/transfers",
    tag = CATALOG_TAG,
    params(("slug" = String, Path, description = "Player slug")),
    request_body = TransferDto,
    responses(
        (status = 201, description = "New affiliation opened", body = AffiliationDto),
        (status = 400, description = "Effective date conflicts with the open stint", body = ErrorDto),
        (status = 404, description = "Unknown player or team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn transfer_player(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(transfer): Json<TransferDto>,
) -> Result<impl IntoResponse, Error> {
    let affiliation = AffiliationService::new(&state.db).transfer(&slug, transfer).await?;

    Ok((StatusCode::CREATED, Json(affiliation)))
}

/// End a player's open affiliation without a successor
#[utoipa::path(
    post,
    path = "/api/players/{slug}/release",
    tag = CATALOG_TAG,
    params(("slug" = String, Path, description = "Player slug")),
    request_body = EndAffiliationDto,
    responses(
        (status = 200, description = "Affiliation closed", body = AffiliationDto),
        (status = 400, description = "End date precedes the stint start", body = ErrorDto),
        (status = 404, description = "Unknown player or no open affiliation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn release_player(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<EndAffiliationDto>,
) -> Result<impl IntoResponse, Error> {
    let affiliation = AffiliationService::new(&state.db)
        .end_affiliation(&slug, request)
        .await?;

    Ok((StatusCode::OK, Json(affiliation)))
}

/// Get everyone affiliated with a team in a season context
#[utoipa::path(
    get,
    path = "/api/teams/{slug}/roster",
    tag = CATALOG_TAG,
    params(
        ("slug" = String, Path, description = "Team slug"),
        SeasonQuery,
    ),
    responses(
        (status = 200, description = "Players overlapping the context window", body = Vec<AffiliationDto>),
        (status = 404, description = "Unknown team or season", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_roster(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<SeasonQuery>,
) -> Result<impl IntoResponse, Error> {
    let ctx = TemporalContext::from_season_param(query.season_id);

    let roster = AffiliationService::new(&state.db)
        .team_roster(&slug, ctx, Utc::now().date_naive())
        .await?;

    Ok((StatusCode::OK, Json(roster)))
}

/// Get a team's home grounds in a season context
#[utoipa::path(
    get,
    path = "/api/teams/{slug}/venues",
    tag = CATALOG_TAG,
    params(
        ("slug" = String, Path, description = "Team slug"),
        SeasonQuery,
    ),
    responses(
        (status = 200, description = "Tenancies overlapping the context window", body = Vec<AffiliationDto>),
        (status = 404, description = "Unknown team or season", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_venues(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<SeasonQuery>,
) -> Result<impl IntoResponse, Error> {
    let ctx = TemporalContext::from_season_param(query.season_id);

    let venues = AffiliationService::new(&state.db)
        .team_venues(&slug, ctx, Utc::now().date_naive())
        .await?;

    Ok((StatusCode::OK, Json(venues)))
}

/// Move a team to a new home ground
#[utoipa::path(
    put,
    path = "/api/teams/{slug}/venue",
    tag = CATALOG_TAG,
    params(("slug" = String, Path, description = "Team slug")),
    request_body = MoveHomeGroundDto,
    responses(
        (status = 200, description = "New tenancy opened", body = AffiliationDto),
        (status = 400, description = "Effective date conflicts with the open tenancy", body = ErrorDto),
        (status = 404, description = "Unknown team or venue", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn move_home_ground(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<MoveHomeGroundDto>,
) -> Result<impl IntoResponse, Error> {
    let tenancy = AffiliationService::new(&state.db)
        .move_home_ground(&slug, &request.venue_slug, request.effective_date)
        .await?;

    Ok((StatusCode::OK, Json(tenancy)))
}

/// List all seasons, newest first
#[utoipa::path(
    get,
    path = "/api/seasons",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All seasons", body = Vec<SeasonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_seasons(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let seasons = SeasonService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(seasons)))
}

/// Flag a season as the current one
#[utoipa::path(
    put,
    path = "/api/seasons/{id}/current",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Season ID")),
    responses(
        (status = 200, description = "Season flagged current", body = SeasonDto),
        (status = 404, description = "Unknown season", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_current_season(
    State(state): State<AppState>,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let season = SeasonService::new(&state.db)
        .set_current_season(season_id)
        .await?;

    Ok((StatusCode::OK, Json(season)))
}

/// List the seasons in which a competition ran an edition
#[utoipa::path(
    get,
    path = "/api/competitions/{slug}/seasons",
    tag = CATALOG_TAG,
    params(("slug" = String, Path, description = "Competition slug")),
    responses(
        (status = 200, description = "Seasons with an edition, newest first", body = Vec<SeasonDto>),
        (status = 404, description = "Unknown competition", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_competition_seasons(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let seasons = SeasonService::new(&state.db).competition_seasons(&slug).await?;

    Ok((StatusCode::OK, Json(seasons)))
}
