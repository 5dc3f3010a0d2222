use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Entity kind accepted in API paths; mirrors the follow table's entity
/// enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityTypeDto {
    Player,
    Team,
    Competition,
}

impl From<EntityTypeDto> for entity::enums::EntityType {
    fn from(value: EntityTypeDto) -> Self {
        match value {
            EntityTypeDto::Player => Self::Player,
            EntityTypeDto::Team => Self::Team,
            EntityTypeDto::Competition => Self::Competition,
        }
    }
}

/// Identity-level view of any resolvable entity.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct EntityDto {
    pub id: i32,
    pub entity_type: EntityTypeDto,
    pub slug: String,
    pub name: String,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct SeasonDto {
    pub id: i32,
    pub label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_current: bool,
}

/// A player-team or team-venue affiliation interval. `valid_to` is absent
/// while the affiliation is still open.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct AffiliationDto {
    pub entity_id: i32,
    pub entity_slug: String,
    pub entity_name: String,
    pub kind: String,
    pub valid_from: NaiveDate,
    pub valid_to: Option<NaiveDate>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct StandingDto {
    pub position: i32,
    pub team_id: i32,
    pub team_name: String,
    pub played: i32,
    pub won: i32,
    pub drawn: i32,
    pub lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerSeasonStatDto {
    pub competition_season_id: i32,
    pub team_id: i32,
    pub appearances: i32,
    pub goals: i32,
    pub assists: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
}

/// A player's per-season lines plus their career totals.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerStatsDto {
    pub seasons: Vec<PlayerSeasonStatDto>,
    pub career: CareerTotalsDto,
}

/// Career totals summed across every competition season.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CareerTotalsDto {
    pub appearances: i64,
    pub goals: i64,
    pub assists: i64,
    pub yellow_cards: i64,
    pub red_cards: i64,
}

/// Scores are absent until the fixture finishes.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct FixtureDto {
    pub id: i32,
    pub competition_season_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub kickoff: NaiveDateTime,
    pub status: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

impl From<entity::fixture::Model> for FixtureDto {
    fn from(fixture: entity::fixture::Model) -> Self {
        use entity::enums::FixtureStatus;

        let status = match fixture.status {
            FixtureStatus::Scheduled => "scheduled",
            FixtureStatus::Finished => "finished",
            FixtureStatus::Postponed => "postponed",
        };

        Self {
            id: fixture.id,
            competition_season_id: fixture.competition_season_id,
            home_team_id: fixture.home_team_id,
            away_team_id: fixture.away_team_id,
            kickoff: fixture.kickoff,
            status: status.to_string(),
            home_score: fixture.home_score,
            away_score: fixture.away_score,
        }
    }
}

/// Final score submitted for a fixture; flips it to finished and triggers
/// the standings and stats recompute.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ResultDto {
    pub home_score: i32,
    pub away_score: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventKindDto {
    Goal,
    Assist,
    YellowCard,
    RedCard,
}

impl From<EventKindDto> for entity::enums::EventKind {
    fn from(value: EventKindDto) -> Self {
        match value {
            EventKindDto::Goal => Self::Goal,
            EventKindDto::Assist => Self::Assist,
            EventKindDto::YellowCard => Self::YellowCard,
            EventKindDto::RedCard => Self::RedCard,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordEventDto {
    pub team_id: i32,
    pub player_id: i32,
    pub minute: i32,
    pub kind: EventKindDto,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct FixtureEventDto {
    pub id: i32,
    pub fixture_id: i32,
    pub team_id: i32,
    pub player_id: i32,
    pub minute: i32,
    pub kind: String,
}

impl From<entity::fixture_event::Model> for FixtureEventDto {
    fn from(event: entity::fixture_event::Model) -> Self {
        use entity::enums::EventKind;

        let kind = match event.kind {
            EventKind::Goal => "goal",
            EventKind::Assist => "assist",
            EventKind::YellowCard => "yellow_card",
            EventKind::RedCard => "red_card",
        };

        Self {
            id: event.id,
            fixture_id: event.fixture_id,
            team_id: event.team_id,
            player_id: event.player_id,
            minute: event.minute,
            kind: kind.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AffiliationKindDto {
    Contract,
    Loan,
}

impl From<AffiliationKindDto> for entity::enums::AffiliationKind {
    fn from(value: AffiliationKindDto) -> Self {
        match value {
            AffiliationKindDto::Contract => Self::Contract,
            AffiliationKindDto::Loan => Self::Loan,
        }
    }
}

/// Moves a player to a new team: the open affiliation of this kind, if
/// any, is closed the day before `effective_date`.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct TransferDto {
    pub team_slug: String,
    pub kind: AffiliationKindDto,
    pub effective_date: NaiveDate,
}

/// Ends an open affiliation without a successor (release, loan return).
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct EndAffiliationDto {
    pub kind: AffiliationKindDto,
    pub end_date: NaiveDate,
}

/// Re-homes a team: the open tenancy, if any, is closed the day before
/// `effective_date`.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct MoveHomeGroundDto {
    pub venue_slug: String,
    pub effective_date: NaiveDate,
}
