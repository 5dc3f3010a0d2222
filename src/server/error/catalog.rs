use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Lookup failures for reference data. "Found but empty" is never an error;
/// these fire only when the identifier itself is unknown.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("No {entity_type} found for slug {slug:?}")]
    EntityNotFound { entity_type: String, slug: String },
    #[error("Season ID {0} not found")]
    SeasonNotFound(i32),
    #[error("Competition {competition_id} has no season {season_id}")]
    CompetitionSeasonNotFound {
        competition_id: i32,
        season_id: i32,
    },
    #[error("Competition {0} has no current season")]
    NoCurrentSeason(i32),
    #[error("Fixture ID {0} not found")]
    FixtureNotFound(i32),
    #[error("Player {player_id} has no open affiliation of kind {kind:?}")]
    NoOpenAffiliation { player_id: i32, kind: String },
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
