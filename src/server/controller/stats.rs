use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use entity::enums::FixtureStatus;

use crate::{
    model::{
        api::ErrorDto,
        catalog::{
            FixtureDto, FixtureEventDto, PlayerSeasonStatDto, PlayerStatsDto, RecordEventDto,
            ResultDto, StandingDto,
        },
    },
    server::{
        controller::catalog::SeasonQuery,
        data::{
            catalog::competition::CompetitionRepository,
            stats::{fixture::FixtureRepository, fixture_event::FixtureEventRepository},
        },
        error::{catalog::CatalogError, Error},
        model::{app::AppState, temporal::TemporalContext},
        service::{
            catalog::season::SeasonService,
            stats::{player_stats::PlayerStatsService, standings::StandingsService},
        },
    },
};

pub static STATS_TAG: &str = "stats";

/// Season scope plus optional status and result-count narrowing.
#[derive(Deserialize, IntoParams)]
pub struct FixtureQuery {
    pub season_id: Option<i32>,
    /// One of `scheduled`, `finished`, `postponed`.
    pub status: Option<String>,
}

#[derive(Deserialize, IntoParams)]
pub struct TopScorerQuery {
    pub season_id: Option<i32>,
    /// Number of rows, at most 100. Defaults to 10.
    pub limit: Option<i64>,
}

/// Get the ordered league table for a competition
#[utoipa::path(
    get,
    path = "/api/competitions/{slug}/standings",
    tag = STATS_TAG,
    params(
        ("slug" = String, Path, description = "Competition slug"),
        SeasonQuery,
    ),
    responses(
        (status = 200, description = "Standings in table order", body = Vec<StandingDto>),
        (status = 404, description = "Unknown competition or season", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_standings(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<SeasonQuery>,
) -> Result<impl IntoResponse, Error> {
    let ctx = TemporalContext::from_season_param(query.season_id);

    let table = StandingsService::new(&state.db).table(&slug, ctx).await?;

    Ok((StatusCode::OK, Json(table)))
}

/// Get a player's per-season stat lines and career totals
#[utoipa::path(
    get,
    path = "/api/players/{slug}/stats",
    tag = STATS_TAG,
    params(
        ("slug" = String, Path, description = "Player slug"),
        SeasonQuery,
    ),
    responses(
        (status = 200, description = "Stat lines plus career totals", body = PlayerStatsDto),
        (status = 404, description = "Unknown player", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player_stats(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<SeasonQuery>,
) -> Result<impl IntoResponse, Error> {
    let (seasons, career) = PlayerStatsService::new(&state.db)
        .player_stats(&slug, query.season_id)
        .await?;

    Ok((StatusCode::OK, Json(PlayerStatsDto { seasons, career })))
}

/// Get the top scorers of a competition edition
#[utoipa::path(
    get,
    path = "/api/competitions/{slug}/top-scorers",
    tag = STATS_TAG,
    params(
        ("slug" = String, Path, description = "Competition slug"),
        TopScorerQuery,
    ),
    responses(
        (status = 200, description = "Stat lines ordered by goals", body = Vec<PlayerSeasonStatDto>),
        (status = 400, description = "Limit out of range", body = ErrorDto),
        (status = 404, description = "Unknown competition or season", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_scorers(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<TopScorerQuery>,
) -> Result<impl IntoResponse, Error> {
    let limit = query.limit.unwrap_or(10);
    if !(1..=100).contains(&limit) {
        return Err(Error::Validation(
            "Limit must fall between 1 and 100".to_string(),
        ));
    }

    let edition = resolve_edition(&state, &slug, query.season_id).await?;

    let lines = PlayerStatsService::new(&state.db)
        .top_scorers(edition.id, limit as u64)
        .await?;

    let dtos: Vec<PlayerSeasonStatDto> = lines
        .into_iter()
        .map(|line| PlayerSeasonStatDto {
            competition_season_id: line.competition_season_id,
            team_id: line.team_id,
            appearances: line.appearances,
            goals: line.goals,
            assists: line.assists,
            yellow_cards: line.yellow_cards,
            red_cards: line.red_cards,
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List the fixtures of a competition edition
#[utoipa::path(
    get,
    path = "/api/competitions/{slug}/fixtures",
    tag = STATS_TAG,
    params(
        ("slug" = String, Path, description = "Competition slug"),
        FixtureQuery,
    ),
    responses(
        (status = 200, description = "Fixtures in kickoff order", body = Vec<FixtureDto>),
        (status = 400, description = "Unknown status value", body = ErrorDto),
        (status = 404, description = "Unknown competition or season", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_fixtures(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<FixtureQuery>,
) -> Result<impl IntoResponse, Error> {
    let status = match query.status.as_deref() {
        None => None,
        Some("scheduled") => Some(FixtureStatus::Scheduled),
        Some("finished") => Some(FixtureStatus::Finished),
        Some("postponed") => Some(FixtureStatus::Postponed),
        Some(other) => {
            return Err(Error::Validation(format!("Unknown fixture status {other:?}")))
        }
    };

    let edition = resolve_edition(&state, &slug, query.season_id).await?;

    let fixtures = FixtureRepository::new(&state.db)
        .list_for_competition_season(edition.id, status)
        .await?;

    let dtos: Vec<FixtureDto> = fixtures.into_iter().map(FixtureDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List the recorded events of a fixture
#[utoipa::path(
    get,
    path = "/api/fixtures/{id}/events",
    tag = STATS_TAG,
    params(("id" = i32, Path, description = "Fixture ID")),
    responses(
        (status = 200, description = "Events in minute order", body = Vec<FixtureEventDto>),
        (status = 404, description = "Unknown fixture", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fixture_events(
    State(state): State<AppState>,
    Path(fixture_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let fixture_repo = FixtureRepository::new(&state.db);

    fixture_repo
        .get(fixture_id)
        .await?
        .ok_or(CatalogError::FixtureNotFound(fixture_id))?;

    let events = FixtureEventRepository::new(&state.db)
        .list_for_fixture(fixture_id)
        .await?;

    let dtos: Vec<FixtureEventDto> = events.into_iter().map(FixtureEventDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Record a match event for a fixture
#[utoipa::path(
    post,
    path = "/api/fixtures/{id}/events",
    tag = STATS_TAG,
    params(("id" = i32, Path, description = "Fixture ID")),
    request_body = RecordEventDto,
    responses(
        (status = 201, description = "Event recorded", body = FixtureEventDto),
        (status = 400, description = "Minute out of range", body = ErrorDto),
        (status = 404, description = "Unknown fixture", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_event(
    State(state): State<AppState>,
    Path(fixture_id): Path<i32>,
    Json(event): Json<RecordEventDto>,
) -> Result<impl IntoResponse, Error> {
    let created = PlayerStatsService::new(&state.db)
        .record_event(fixture_id, event)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Record the final score of a fixture
#[utoipa::path(
    post,
    path = "/api/fixtures/{id}/result",
    tag = STATS_TAG,
    params(("id" = i32, Path, description = "Fixture ID")),
    request_body = ResultDto,
    responses(
        (status = 200, description = "Result recorded; table and stats recomputed", body = FixtureDto),
        (status = 400, description = "Negative score", body = ErrorDto),
        (status = 404, description = "Unknown fixture", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_result(
    State(state): State<AppState>,
    Path(fixture_id): Path<i32>,
    Json(result): Json<ResultDto>,
) -> Result<impl IntoResponse, Error> {
    let fixture = StandingsService::new(&state.db)
        .record_result(fixture_id, result.home_score, result.away_score)
        .await?;

    Ok((StatusCode::OK, Json(fixture)))
}

async fn resolve_edition(
    state: &AppState,
    competition_slug: &str,
    season_id: Option<i32>,
) -> Result<entity::competition_season::Model, Error> {
    let competition = CompetitionRepository::new(&state.db)
        .get_by_slug(competition_slug)
        .await?
        .ok_or_else(|| CatalogError::EntityNotFound {
            entity_type: "competition".to_string(),
            slug: competition_slug.to_string(),
        })?;

    let (edition, _) = SeasonService::new(&state.db)
        .resolve_edition(competition.id, TemporalContext::from_season_param(season_id))
        .await?;

    Ok(edition)
}
